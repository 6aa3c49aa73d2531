use crate::artifacts::index::{SIGNATURE, VERSION};
use crate::artifacts::objects::object::Packable;
use byteorder::WriteBytesExt;
use bytes::Bytes;
use derive_new::new;
use std::io::Write;

#[derive(Debug, Clone, new)]
pub struct IndexHeader {
    pub(crate) marker: String,
    pub(crate) version: u32,
    pub(crate) entries_count: u32,
}

impl IndexHeader {
    /// Header for a version 2 index holding `entries_count` entries
    pub(crate) fn with_entries(entries_count: u32) -> Self {
        IndexHeader::new(String::from(SIGNATURE), VERSION, entries_count)
    }
}

impl Packable for IndexHeader {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        // pack!(self.marker, self.version, self.entries_count => "a4N2")
        let mut bytes = Vec::new();
        bytes.write_all(self.marker.as_bytes())?;
        bytes.write_u32::<byteorder::NetworkEndian>(self.version)?;
        bytes.write_u32::<byteorder::NetworkEndian>(self.entries_count)?;

        Ok(Bytes::from(bytes))
    }
}
