use std::io::BufRead;
use std::iter::FusedIterator;

use groupdef::GroupDef;

use crate::{AclEntry, AclError, AclSource, Method};

/// Iterator over every principal list granting one method on one resource.
///
/// Created by [`AclSource::grants`]. Stops after the cursor is exhausted or
/// after yielding the first error.
#[derive(Debug)]
pub struct Grants<'a, R> {
    source: &'a mut AclSource<R>,
    resource_path: &'a str,
    method: &'a Method,
    finished: bool,
}

impl<R: BufRead> Iterator for Grants<'_, R> {
    type Item = Result<GroupDef, AclError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let step = self
            .source
            .find_first_matching_entry(self.resource_path, self.method);
        settle(&mut self.finished, step)
    }
}

impl<R: BufRead> FusedIterator for Grants<'_, R> {}

/// Iterator over every record whose template covers one resource.
///
/// Created by [`AclSource::entries`].
#[derive(Debug)]
pub struct Entries<'a, R> {
    source: &'a mut AclSource<R>,
    resource_path: &'a str,
    finished: bool,
}

impl<R: BufRead> Iterator for Entries<'_, R> {
    type Item = Result<AclEntry, AclError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let step = self.source.find_full_entry(self.resource_path);
        settle(&mut self.finished, step)
    }
}

impl<R: BufRead> FusedIterator for Entries<'_, R> {}

fn settle<T>(finished: &mut bool, step: Result<Option<T>, AclError>) -> Option<Result<T, AclError>> {
    match step {
        Ok(Some(value)) => Some(Ok(value)),
        Ok(None) => {
            *finished = true;
            None
        }
        Err(error) => {
            *finished = true;
            Some(Err(error))
        }
    }
}

impl<R: BufRead> AclSource<R> {
    /// Iterates over the principal lists of every record granting `method`
    /// on `resource_path`, continuing from the current cursor position.
    pub fn grants<'a>(&'a mut self, resource_path: &'a str, method: &'a Method) -> Grants<'a, R> {
        Grants {
            source: self,
            resource_path,
            method,
            finished: false,
        }
    }

    /// Iterates over every record whose template covers `resource_path`,
    /// continuing from the current cursor position.
    pub fn entries<'a>(&'a mut self, resource_path: &'a str) -> Entries<'a, R> {
        Entries {
            source: self,
            resource_path,
            finished: false,
        }
    }
}
