//! Patient vitals input form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use super::{render_header, render_key_hints};
use crate::domain::{FieldKind, VitalField, VitalsInput};
use crate::tui::styles::MedicalTheme;

/// Patient form state
#[derive(Debug, Default)]
pub struct PatientFormState {
    pub input: VitalsInput,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl PatientFormState {
    /// Field under the cursor.
    #[must_use]
    pub fn current_field(&self) -> VitalField {
        VitalField::ALL[self.selected_field % VitalField::ALL.len()]
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % VitalField::ALL.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = VitalField::ALL.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Add a character to the current field.
    ///
    /// Integer fields take digits, decimal fields take digits and one point.
    /// The gender field takes `m` or `f` and replaces its whole value.
    pub fn input_char(&mut self, c: char) {
        let field = self.current_field();
        let value = self.input.get_mut(field);

        let accepted = match field.kind() {
            FieldKind::Integer => {
                if c.is_ascii_digit() {
                    value.push(c);
                    true
                } else {
                    false
                }
            }
            FieldKind::Decimal => {
                if c.is_ascii_digit() || (c == '.' && !value.contains('.')) {
                    value.push(c);
                    true
                } else {
                    false
                }
            }
            FieldKind::Choice => match c.to_ascii_lowercase() {
                'm' => {
                    value.zeroize();
                    value.push_str("male");
                    true
                }
                'f' => {
                    value.zeroize();
                    value.push_str("female");
                    true
                }
                _ => false,
            },
        };

        if accepted {
            self.error_message = None;
        }
    }

    /// Delete the last character
    pub fn delete_char(&mut self) {
        let field = self.current_field();
        let value = self.input.get_mut(field);
        if field.kind() == FieldKind::Choice {
            value.clear();
        } else {
            value.pop();
        }
    }

    /// Clear the current field
    pub fn clear_field(&mut self) {
        let field = self.current_field();
        self.input.get_mut(field).clear();
    }

    /// Fill every field with the sample patient.
    pub fn load_sample_data(&mut self) {
        self.replace_input(VitalsInput::sample());
    }

    /// Swap in new field values, wiping the old buffers first.
    pub fn replace_input(&mut self, input: VitalsInput) {
        self.input.zeroize();
        self.input = input;
        self.error_message = None;
    }

    /// Wipe all field buffers from memory and reset the form.
    pub fn clear_sensitive(&mut self) {
        self.input.zeroize();
        self.error_message = None;
        self.selected_field = 0;
    }
}

/// Render the patient data input form
pub fn render_patient_form(f: &mut Frame, area: Rect, state: &PatientFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_header(
        f,
        chunks[0],
        "Heart Attack Risk Assessment",
        "Enter patient health metrics",
    );
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &PatientFormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (VitalField::ALL.len() + 1) / 2;

    render_field_column(f, columns[0], &VitalField::ALL[..mid], 0, state);
    render_field_column(f, columns[1], &VitalField::ALL[mid..], mid, state);
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[VitalField],
    offset: usize,
    state: &PatientFormState,
) {
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == state.selected_field;
        let (border_style, title_style) = if is_selected {
            (MedicalTheme::border_focused(), MedicalTheme::focused())
        } else {
            (MedicalTheme::border(), MedicalTheme::text_secondary())
        };

        let title = if field.unit().is_empty() {
            format!(" {} ", field.label())
        } else {
            format!(" {} ({}) ", field.label(), field.unit())
        };

        let block = Block::default()
            .title(Span::styled(title, title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let value = state.input.get(*field);
        let value_display = if value.is_empty() {
            Span::styled(field.hint(), MedicalTheme::text_muted())
        } else {
            Span::styled(value, MedicalTheme::text())
        };

        let content = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            value_display,
            if is_selected {
                Span::styled("▌", MedicalTheme::focused())
            } else {
                Span::raw("")
            },
        ]))
        .block(block);

        f.render_widget(content, chunks[i]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &PatientFormState) {
    if let Some(err) = &state.error_message {
        let footer = Paragraph::new(Line::from(vec![
            Span::styled("! ", MedicalTheme::danger()),
            Span::styled(err.as_str(), MedicalTheme::danger()),
        ]))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(MedicalTheme::border()),
        );
        f.render_widget(footer, area);
        return;
    }

    render_key_hints(
        f,
        area,
        &[
            ("↑↓", "Navigate"),
            ("Enter", "Calculate Risk"),
            ("s", "Sample Data"),
            ("Del", "Clear Field"),
            ("Esc", "Upload"),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut state = PatientFormState::default();
        state.prev_field();
        assert_eq!(state.current_field(), VitalField::Troponin);
        state.next_field();
        assert_eq!(state.current_field(), VitalField::Age);
    }

    #[test]
    fn test_integer_field_rejects_non_digits() {
        let mut state = PatientFormState::default();
        for c in "5a.5-".chars() {
            state.input_char(c);
        }
        assert_eq!(state.input.age, "55");
    }

    #[test]
    fn test_decimal_field_takes_one_point() {
        let mut state = PatientFormState {
            selected_field: 7,
            ..Default::default()
        };
        for c in "0.0.5".chars() {
            state.input_char(c);
        }
        assert_eq!(state.input.troponin, "0.05");
    }

    #[test]
    fn test_gender_choice() {
        let mut state = PatientFormState {
            selected_field: 1,
            ..Default::default()
        };
        state.input_char('F');
        assert_eq!(state.input.gender, "female");
        state.input_char('m');
        assert_eq!(state.input.gender, "male");
        state.input_char('x');
        assert_eq!(state.input.gender, "male");
        state.delete_char();
        assert!(state.input.gender.is_empty());
    }

    #[test]
    fn test_input_clears_error() {
        let mut state = PatientFormState {
            error_message: Some("Please fill in all fields".into()),
            ..Default::default()
        };
        state.input_char('x');
        assert!(state.error_message.is_some());
        state.input_char('4');
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_replace_input_overwrites_typed_values() {
        let mut state = PatientFormState {
            selected_field: 2,
            error_message: Some("Heart Rate: Invalid whole number".into()),
            ..Default::default()
        };
        for c in "999".chars() {
            state.input_char(c);
        }

        state.load_sample_data();
        assert_eq!(state.input, VitalsInput::sample());
        assert!(state.error_message.is_none());
        assert_eq!(state.selected_field, 2);

        let mut typed = VitalsInput::sample();
        typed.age = "70".into();
        state.replace_input(typed.clone());
        assert_eq!(state.input, typed);
    }

    #[test]
    fn test_clear_sensitive() {
        let mut state = PatientFormState::default();
        state.load_sample_data();
        state.next_field();
        state.clear_sensitive();

        assert_eq!(state.input, VitalsInput::default());
        assert_eq!(state.selected_field, 0);
    }
}
