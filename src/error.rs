use thiserror::Error;

/// Errors reported by the fallible table-building entry points.
///
/// The distance computations themselves are total; the only thing that can
/// go wrong is sizing or allocating the `(m + 1) x (n + 1)` table.
#[derive(Debug, Error)]
pub enum Error {
    #[error("DP table of {rows} x {cols} cells does not fit in memory")]
    TableTooLarge { rows: usize, cols: usize },

    #[error("DP table has an invalid shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl Error {
    pub fn table_too_large(rows: usize, cols: usize) -> Self {
        Error::TableTooLarge { rows, cols }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_too_large_message() {
        let err = Error::table_too_large(3, 4);
        assert_eq!(
            err.to_string(),
            "DP table of 3 x 4 cells does not fit in memory"
        );
    }
}
