use crate::areas::index::Index;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Directory holding repository metadata, relative to the root
pub const GIT_DIR: &str = ".git";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Index,
}

impl Repository {
    pub fn new(path: impl AsRef<Path>, writer: Box<dyn std::io::Write>) -> Self {
        let path = path.as_ref();
        let index = Index::new(path.join(GIT_DIR).join("index").into_boxed_path());

        Repository {
            path: path.to_path_buf().into_boxed_path(),
            writer: RefCell::new(writer),
            index,
        }
    }

    pub fn git_path(&self) -> Box<Path> {
        self.path.join(GIT_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }
}
