//! HTML rendering for the default listing

use crate::students::StudentRecord;

/// Renders the human-readable roster page.
///
/// One `<li>{name} ({age})</li>` per record, in the order given.
pub fn render_student_list(students: &[StudentRecord]) -> String {
    let mut html = String::with_capacity(256 + students.len() * 48);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Students</title>\n</head>\n<body>\n<h1>Students</h1>\n<ul>\n");

    for student in students {
        html.push_str("<li>");
        escape_into(&mut html, &student.name);
        html.push_str(&format!(" ({})</li>\n", student.age));
    }

    html.push_str("</ul>\n</body>\n</html>\n");
    html
}

fn escape_into(out: &mut String, raw: &str) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
}
