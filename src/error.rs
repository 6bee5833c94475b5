// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    Barcode(String),
    Asset(String),
}

/// Reasons a fault catalog can be rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no records, so no fault could ever be selected.
    Empty,

    /// Two records share the same code.
    DuplicateCode(String),

    /// Two records share the same message.
    DuplicateMessage(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog has no fault records"),
            CatalogError::DuplicateCode(code) => write!(f, "duplicate fault code: {}", code),
            CatalogError::DuplicateMessage(message) => {
                write!(f, "duplicate fault message: {}", message)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Barcode(e) => write!(f, "Barcode Error: {}", e),
            Error::Asset(e) => write!(f, "Asset Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<qrcode::types::QrError> for Error {
    fn from(err: qrcode::types::QrError) -> Self {
        Error::Barcode(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Asset(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_error_converts_and_formats() {
        let err: Error = CatalogError::DuplicateCode("120".into()).into();
        assert_eq!(
            format!("{}", err),
            "Catalog Error: duplicate fault code: 120"
        );
        assert_eq!(Error::from(CatalogError::Empty), Error::Catalog(CatalogError::Empty));
    }

    #[test]
    fn qr_error_maps_to_barcode_variant() {
        let err: Error = qrcode::types::QrError::DataTooLong.into();
        assert!(matches!(err, Error::Barcode(_)));
    }
}
