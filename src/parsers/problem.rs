use crate::parsers::{is_ignored_line, parse_integer, parse_name, Span};
use crate::search::{Cost, ProblemError};
use nom::combinator::all_consuming;

/// The literal token that terminates parsing.
const END_TOKEN: &str = "END";

/// Parses the whole problem file: the total-time budget line first, then
/// one participant per line, with `#` comments and blank lines skipped and
/// an `END` line stopping everything after it. Returns the budget and the
/// (name, time) pairs in file order.
pub fn parse_problem_text(text: &str) -> Result<(Cost, Vec<(String, Cost)>), ProblemError> {
    let mut budget = None;
    let mut members = Vec::new();
    let mut member_count = 1;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if is_ignored_line(line) {
            continue;
        }
        if line == END_TOKEN {
            break;
        }

        let mut fields = line.split_whitespace();
        if budget.is_none() {
            // Only the second field of the budget line is consumed; the
            // first is a free-form keyword.
            let _keyword = fields.next();
            budget = Some(positive_integer_field(fields.next(), "Total time")?);
            continue;
        }

        let name = name_field(
            fields.next(),
            &format!("Name of participant {member_count}"),
        )?;
        let time = positive_integer_field(
            fields.next(),
            &format!("Time needed by participant {member_count} to cross the river"),
        )?;
        members.push((name, time));
        member_count += 1;
    }

    let budget = budget.ok_or(ProblemError::MissingBudget)?;
    Ok((budget, members))
}

fn name_field(field: Option<&str>, label: &str) -> Result<String, ProblemError> {
    let field = field.unwrap_or("").trim();
    match all_consuming(|i| parse_name(i))(Span::new(field)) {
        Ok((_, name)) => Ok(name),
        Err(_) => Err(ProblemError::EmptyField {
            label: label.to_string(),
        }),
    }
}

fn positive_integer_field(field: Option<&str>, label: &str) -> Result<Cost, ProblemError> {
    let field = field.unwrap_or("").trim();
    if field.is_empty() {
        return Err(ProblemError::EmptyField {
            label: label.to_string(),
        });
    }
    let value = match all_consuming(|i| parse_integer(i))(Span::new(field)) {
        Ok((_, value)) => value,
        Err(_) => {
            return Err(ProblemError::NotAnInteger {
                label: label.to_string(),
            })
        }
    };
    if value <= 0 {
        return Err(ProblemError::NotPositive {
            label: label.to_string(),
        });
    }
    Cost::try_from(value).map_err(|_| ProblemError::OutOfRange {
        label: label.to_string(),
    })
}
