//! Parse HTTP response header lines into HeadResponse.

use super::HeadResponse;

/// Builds a response from the collected header lines and the final status code.
///
/// When a redirect chain was followed the lines hold every hop; only the block
/// after the last status line is considered.
pub(crate) fn parse_headers(status_code: u32, lines: &[String]) -> HeadResponse {
    let start = lines
        .iter()
        .rposition(|l| is_status_line(l))
        .map_or(0, |i| i + 1);

    let mut content_length = None;
    let mut content_type = None;

    for line in &lines[start..] {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse::<u64>().ok();
            }
            if name.eq_ignore_ascii_case("content-type") {
                content_type = Some(value.to_string()).filter(|v| !v.is_empty());
            }
        }
    }

    HeadResponse {
        status_code,
        content_length,
        content_type,
    }
}

fn is_status_line(line: &str) -> bool {
    line.get(..5)
        .is_some_and(|p| p.eq_ignore_ascii_case("http/"))
}
