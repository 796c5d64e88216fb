//! Corpus Scan Application Layer

pub mod scan_usecase;

pub use scan_usecase::{ScanUseCase, ScanUseCaseImpl};
