//! Student list formatting

use crate::models::Student;

/// Format the roster as a table
pub fn format_student_list(students: &[Student]) -> String {
    if students.is_empty() {
        return "No students found.".to_string();
    }

    let name_width = students
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {}\n",
        "ID",
        "Name",
        "Enrolled",
        name_width = name_width
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<8}\n",
        "",
        "",
        "",
        name_width = name_width
    ));

    for student in students {
        let enrolled = student
            .enrolled
            .map(|m| m.canonical_form())
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {}\n",
            student.id.short(),
            student.name,
            enrolled,
            name_width = name_width
        ));
    }

    output.push_str(&format!("\n{} student(s)", students.len()));
    output
}
