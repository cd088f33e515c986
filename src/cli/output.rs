//! Output formatting utilities

use crate::domain::Question;

/// Format a list of questions for display, one per line
pub fn format_question_list(questions: &[Question]) -> String {
    if questions.is_empty() {
        return "No questions found\n".to_string();
    }

    let mut output = String::new();
    for question in questions {
        let area = if question.area.trim().is_empty() {
            "-"
        } else {
            question.area.as_str()
        };
        output.push_str(&format!(
            "{}  {:<6}  [{}] {}\n",
            question.id,
            question.difficulty,
            area,
            first_line(&question.statement)
        ));
    }
    output
}

/// Format a list of areas for display.
pub fn format_area_list(areas: &[String]) -> String {
    if areas.is_empty() {
        return "No areas found\n".to_string();
    }

    let mut output = String::new();
    for area in areas {
        output.push_str(area);
        output.push('\n');
    }
    output
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;
    use uuid::Uuid;

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_question_list(&[]), "No questions found\n");
    }

    #[test]
    fn test_format_question_list() {
        let mut q = Question::new("2+2=?\nShow your work.", "Math");
        q.id = Uuid::parse_str("6f0c2a52-6a4b-4a7e-9a35-1d7f8f5a6b01").unwrap();
        q.difficulty = Difficulty::Easy;

        let output = format_question_list(&[q]);
        assert_eq!(
            output,
            "6f0c2a52-6a4b-4a7e-9a35-1d7f8f5a6b01  easy    [Math] 2+2=?\n"
        );
    }

    #[test]
    fn test_format_blank_area() {
        let output = format_question_list(&[Question::new("Untitled", "")]);
        assert!(output.contains("[-] Untitled"));
    }

    #[test]
    fn test_format_area_list() {
        assert_eq!(format_area_list(&[]), "No areas found\n");
        let areas = vec!["Math".to_string(), "Physics".to_string()];
        assert_eq!(format_area_list(&areas), "Math\nPhysics\n");
    }
}
