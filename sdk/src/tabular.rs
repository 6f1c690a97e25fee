//! CSV projection of flat wire models

use serde::Serialize;

use crate::error::SdkError;

/// Render rows as CSV with a header line.
///
/// Field names become column names and `None` becomes an empty cell.
/// Only flat models are supported; `LoanApplicationDetailed` nests
/// structs and is rejected by the writer.
pub fn to_csv<T: Serialize>(rows: &[T]) -> Result<String, SdkError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| {
        SdkError::Csv(csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e,
        )))
    })
}
