//! Log panel wording.
//!
//! These strings are what the artist reads, so keep them stable.

pub const HTTP_ERROR_MESSAGE: &str = "Http Error: ";
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection Error: ";
pub const TIMEOUT_ERROR_MESSAGE: &str = "Timeout Error: ";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Oops... Unknown Error: ";
pub const INVALID_METHOD_MESSAGE: &str = "Error: Request method is invalid: ";
pub const INVALID_HOST_MESSAGE: &str = "Error: host has to start with https:// or http://";
pub const INVALID_URL_MESSAGE: &str = "Error: request url is invalid: ";
pub const FILENAME_EMPTY_MESSAGE: &str = "Error: file name is empty";

pub const STATUS_PREFIX: &str = "Status: ";
pub const HEADERS_PREFIX: &str = "Headers: ";
pub const BODY_PREFIX: &str = "Body: ";

pub const TMP_FILE_SAVED_PREFIX: &str = "Tmp file saved to: ";
pub const EXPORTING_PREFIX: &str = "Exporting...";
pub const EXPORT_FAILED_PREFIX: &str = "Error: scene export failed: ";
pub const MATERIAL_MISSING_PREFIX: &str = "Warning: material file not found: ";
pub const CLEANUP_FAILED_PREFIX: &str = "Warning: could not remove tmp file: ";
pub const MODEL_SECTION: &str = "< ---- Model ---- >";
pub const TEXTURES_SECTION: &str = "< ---- Textures ---- >";
pub const TEXTURE_SEPARATOR: &str = "------------------------";
pub const ID_PREFIX: &str = "ID: ";
pub const FILENAME_PREFIX: &str = "Filename: ";
pub const UPLOAD_DATE_PREFIX: &str = "Upload date: ";
pub const HREF_PREFIX: &str = "Href: ";
pub const DONE_MESSAGE: &str = "Done!";
