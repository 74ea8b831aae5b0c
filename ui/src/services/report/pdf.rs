//! Single-page PDF composition
//!
//! Writes a minimal PDF 1.4 document by hand: one A4 portrait page whose
//! content is the captured report bitmap scaled to fill the page. The JPEG
//! stream is embedded as-is via DCTDecode, so no recompression happens here.

/// A4 portrait in PDF points.
pub const PAGE_WIDTH_PT: f64 = 595.28;
pub const PAGE_HEIGHT_PT: f64 = 841.89;

/// Composes the one-page report document around a JPEG bitmap of the given
/// pixel dimensions. The bitmap is stretched to fill the page, matching the
/// A4 proportions it was captured at.
pub fn compose_report_pdf(jpeg_data: &[u8], width_px: u32, height_px: u32) -> Vec<u8> {
    let content = format!(
        "q\n{PAGE_WIDTH_PT:.2} 0 0 {PAGE_HEIGHT_PT:.2} 0 0 cm\n/Im0 Do\nQ\n"
    );

    let mut buf: Vec<u8> = Vec::with_capacity(jpeg_data.len() + 1024);
    let mut offsets: Vec<usize> = Vec::with_capacity(5);

    buf.extend_from_slice(b"%PDF-1.4\n");

    offsets.push(buf.len());
    buf.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    offsets.push(buf.len());
    buf.extend_from_slice(b"2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n");

    offsets.push(buf.len());
    buf.extend_from_slice(
        format!(
            "3 0 obj\n<< /Type /Page /Parent 2 0 R \
             /MediaBox [0 0 {PAGE_WIDTH_PT:.2} {PAGE_HEIGHT_PT:.2}] \
             /Resources << /XObject << /Im0 4 0 R >> >> \
             /Contents 5 0 R >>\nendobj\n"
        )
        .as_bytes(),
    );

    offsets.push(buf.len());
    buf.extend_from_slice(
        format!(
            "4 0 obj\n<< /Type /XObject /Subtype /Image \
             /Width {width_px} /Height {height_px} \
             /ColorSpace /DeviceRGB /BitsPerComponent 8 \
             /Filter /DCTDecode /Length {} >>\nstream\n",
            jpeg_data.len()
        )
        .as_bytes(),
    );
    buf.extend_from_slice(jpeg_data);
    buf.extend_from_slice(b"\nendstream\nendobj\n");

    offsets.push(buf.len());
    buf.extend_from_slice(
        format!(
            "5 0 obj\n<< /Length {} >>\nstream\n{content}endstream\nendobj\n",
            content.len()
        )
        .as_bytes(),
    );

    let xref_offset = buf.len();
    buf.extend_from_slice(b"xref\n0 6\n0000000000 65535 f \n");
    for offset in &offsets {
        buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    buf.extend_from_slice(
        format!("trailer\n<< /Size 6 /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n").as_bytes(),
    );

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    // Not a real image, but the composer embeds the stream untouched.
    const FAKE_JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x01, 0x02, 0x03, 0xFF, 0xD9];

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack
            .windows(needle.len())
            .position(|window| window == needle)
    }

    #[test]
    fn test_document_framing() {
        let pdf = compose_report_pdf(FAKE_JPEG, 1588, 2246);
        assert!(pdf.starts_with(b"%PDF-1.4\n"));
        assert!(pdf.ends_with(b"%%EOF\n"));
        assert!(!pdf.is_empty());
    }

    #[test]
    fn test_image_object_carries_dimensions_and_filter() {
        let pdf = compose_report_pdf(FAKE_JPEG, 1588, 2246);
        assert!(find(&pdf, b"/Width 1588 /Height 2246").is_some());
        assert!(find(&pdf, b"/Filter /DCTDecode").is_some());
        assert!(find(&pdf, FAKE_JPEG).is_some());
        assert!(find(&pdf, format!("/Length {}", FAKE_JPEG.len()).as_bytes()).is_some());
    }

    #[test]
    fn test_page_is_a4_portrait_and_content_fills_it() {
        let pdf = compose_report_pdf(FAKE_JPEG, 100, 141);
        assert!(find(&pdf, b"/MediaBox [0 0 595.28 841.89]").is_some());
        assert!(find(&pdf, b"595.28 0 0 841.89 0 0 cm\n/Im0 Do").is_some());
    }

    #[test]
    fn test_xref_offsets_point_at_object_headers() {
        let pdf = compose_report_pdf(FAKE_JPEG, 10, 10);

        let xref_pos = find(&pdf, b"xref\n0 6\n").unwrap();
        let table = &pdf[xref_pos..];
        // Skip "xref\n0 6\n" and the free-object line.
        let entries: Vec<&[u8]> = table
            .split(|&b| b == b'\n')
            .skip(3)
            .take(5)
            .collect();

        for (index, entry) in entries.iter().enumerate() {
            let offset: usize = std::str::from_utf8(&entry[..10])
                .unwrap()
                .parse()
                .unwrap();
            let header = format!("{} 0 obj", index + 1);
            assert!(
                pdf[offset..].starts_with(header.as_bytes()),
                "object {} offset {} is wrong",
                index + 1,
                offset
            );
        }

        // startxref points at the xref table itself
        let startxref_pos = find(&pdf, b"startxref\n").unwrap();
        let rest = &pdf[startxref_pos + "startxref\n".len()..];
        let line_end = rest.iter().position(|&b| b == b'\n').unwrap();
        let recorded: usize = std::str::from_utf8(&rest[..line_end]).unwrap().parse().unwrap();
        assert_eq!(recorded, xref_pos);
    }
}
