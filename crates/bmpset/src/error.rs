use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum InversionListError {
    #[error("Boundary {value:#x} at index {index} is not greater than {previous:#x}")]
    NotAscending {
        index: usize,
        previous: u32,
        value: u32,
    },

    #[error("Boundary {value:#x} at index {index} is past U+10FFFF")]
    OutOfRange { index: usize, value: u32 },
}
