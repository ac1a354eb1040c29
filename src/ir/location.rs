use std::cell::RefCell;
use std::rc::Rc;

/// Opaque handle to a source location owned by a [`LocationManager`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Location(u32);

#[derive(Clone, Debug)]
struct LocationRecord {
    file: String,
    line: u32,
    column: u32,
}

/// Maps `(file, line, column)` triples to opaque [`Location`] handles.
///
/// Cloning a manager yields a second handle to the same records, so the
/// translation unit and the reader can share one table while the parse is
/// in flight.
#[derive(Clone, Debug, Default)]
pub struct LocationManager {
    records: Rc<RefCell<Vec<LocationRecord>>>,
}

impl LocationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_location(&self, file: impl Into<String>, line: u32, column: u32) -> Location {
        let mut records = self.records.borrow_mut();
        records.push(LocationRecord {
            file: file.into(),
            line,
            column,
        });
        Location((records.len() - 1) as u32)
    }

    /// Expand a handle back to its `(file, line, column)` triple.
    pub fn expand(&self, location: Location) -> Option<(String, u32, u32)> {
        self.records
            .borrow()
            .get(location.0 as usize)
            .map(|r| (r.file.clone(), r.line, r.column))
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}
