// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DEFAULT_PDF_FILE_NAME, DomainError, PdfUpload, internal_pdf_path};

// "%PDF-1.4" in base64.
const PDF_PAYLOAD: &str = "JVBERi0xLjQ=";

#[test]
fn test_decodes_pdf_data_url() {
    let upload: PdfUpload = PdfUpload::from_data_url(
        &format!("data:application/pdf;base64,{PDF_PAYLOAD}"),
        " report.pdf ",
    )
    .unwrap();

    assert_eq!(upload.bytes, b"%PDF-1.4");
    assert_eq!(upload.file_name, "report.pdf");
    assert_eq!(upload.mime_type, "application/pdf");
}

#[test]
fn test_blank_file_name_defaults() {
    let upload: PdfUpload =
        PdfUpload::from_data_url(&format!("data:Application/PDF;base64,{PDF_PAYLOAD}"), "")
            .unwrap();
    assert_eq!(upload.file_name, DEFAULT_PDF_FILE_NAME);
}

#[test]
fn test_rejects_non_pdf_mime_type() {
    let result = PdfUpload::from_data_url(&format!("data:image/png;base64,{PDF_PAYLOAD}"), "a");
    assert_eq!(
        result,
        Err(DomainError::InvalidPdfUpload(String::from(
            "Only PDF files are supported."
        )))
    );
}

#[test]
fn test_rejects_malformed_data_url() {
    for input in [
        "application/pdf;base64,JVBERi0xLjQ=",
        "data:application/pdf,JVBERi0xLjQ=",
        "data:;base64,JVBERi0xLjQ=",
        "data:application/pdf;base64,",
        "data:application/pdf;base64,@@@",
    ] {
        assert_eq!(
            PdfUpload::from_data_url(input, "a.pdf"),
            Err(DomainError::InvalidPdfUpload(String::from(
                "Invalid PDF upload format."
            ))),
            "input: {input}"
        );
    }
}

#[test]
fn test_rejects_payload_that_decodes_to_nothing() {
    let result = PdfUpload::from_data_url("data:application/pdf;base64,====", "a.pdf");
    assert!(matches!(result, Err(DomainError::InvalidPdfUpload(_))));
}

#[test]
fn test_internal_pdf_path_format() {
    assert_eq!(
        internal_pdf_path(2025, "rover"),
        "/api/projects/2025/rover/pdf"
    );
}
