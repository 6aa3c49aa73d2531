use anyhow::Result;
use bytes::Bytes;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}
