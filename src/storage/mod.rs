//! Storage layer
//!
//! JSON file storage with atomic writes plus the audit trail. The fee
//! ledger itself lives in memory; `FeeRepository` only moves its records to
//! and from disk.

pub mod fees;
pub mod file_io;
pub mod init;
pub mod students;

pub use fees::{FeeRecord, FeeRepository};
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use students::StudentRepository;

use crate::audit::AuditLogger;
use crate::config::paths::TuitionPaths;
use crate::error::TuitionError;
use crate::ledger::FeeLedger;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TuitionPaths,
    pub students: StudentRepository,
    pub fees: FeeRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TuitionPaths) -> Result<Self, TuitionError> {
        paths.ensure_directories()?;

        Ok(Self {
            students: StudentRepository::new(paths.students_file()),
            fees: FeeRepository::new(paths.fees_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// The live fee ledger
    pub fn ledger(&self) -> &FeeLedger {
        self.fees.ledger()
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TuitionError> {
        self.students.load()?;
        self.fees.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), TuitionError> {
        self.students.save()?;
        self.fees.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
