//! `multipart/form-data` body encoding.

use std::path::{Path, PathBuf};

use rand::Rng;

use crate::config::MULTIPART_FILE_CONTENT_TYPE;
use crate::content_type::ContentKey;
use crate::error_handling::HttpClientError;

/// Encodes text fields and files into a multipart body.
///
/// Text parts come first, then file parts, each group in the given order.
/// Every file is read before anything is written, so a read failure yields
/// an error and no partial body.
///
/// # Returns
///
/// The body bytes and the matching `Content-Type` value (with boundary).
///
/// # Errors
///
/// - `HttpClientError::ReadFile` if a file cannot be read
/// - `HttpClientError::Multipart` if a field or file name would break the part headers
pub(crate) fn encode_form_data(
    texts: &[(String, String)],
    files: &[(String, PathBuf)],
) -> Result<(Vec<u8>, String), HttpClientError> {
    let mut parts = Vec::with_capacity(files.len());
    for (field, path) in files {
        let data = std::fs::read(path).map_err(|source| HttpClientError::ReadFile {
            path: path.clone(),
            source,
        })?;
        parts.push((field, file_name(path)?, data));
    }

    let boundary = new_boundary();
    let mut body = Vec::new();

    for (field, value) in texts {
        check_header_safe("field name", field)?;
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{field}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    for (field, filename, data) in parts {
        check_header_safe("field name", field)?;
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(
            format!("Content-Type: {MULTIPART_FILE_CONTENT_TYPE}\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(&data);
        body.extend_from_slice(b"\r\n");
    }

    // closing boundary
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    let content_type = format!(
        "{}; boundary={boundary}",
        ContentKey::FormData.content_type()
    );
    Ok((body, content_type))
}

fn new_boundary() -> String {
    let mut rng = rand::rng();
    format!(
        "----fluenthttp{:016x}{:016x}",
        rng.random::<u64>(),
        rng.random::<u64>()
    )
}

fn file_name(path: &Path) -> Result<String, HttpClientError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            HttpClientError::Multipart(format!("{} has no file name", path.display()))
        })?;
    check_header_safe("file name", &name)?;
    Ok(name)
}

fn check_header_safe(what: &str, value: &str) -> Result<(), HttpClientError> {
    if value.contains(['"', '\r', '\n']) {
        return Err(HttpClientError::Multipart(format!(
            "{what} {value:?} contains a quote or line break"
        )));
    }
    Ok(())
}
