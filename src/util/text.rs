//! String helpers: `${VAR}` substitution and error descriptions

use std::collections::HashMap;
use std::error::Error;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Regex for a variable reference: `${name}`
static VARIABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^${}]+)\}").unwrap());

/// Replace every `${NAME}` in `template` with `variables[NAME]`.
///
/// References to unknown variables are left untouched and substituted values
/// are not expanded again.
///
/// ```
/// use std::collections::HashMap;
/// use common_core::util::text::substitute_variables;
///
/// let vars = HashMap::from([("name".to_string(), "Ada".to_string())]);
/// assert_eq!(substitute_variables("Hi ${name}, ${missing}", &vars), "Hi Ada, ${missing}");
/// ```
pub fn substitute_variables(template: &str, variables: &HashMap<String, String>) -> String {
    VARIABLE_RE
        .replace_all(template, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Describe an error together with its chain of sources: `outer: inner: root`.
///
/// A source whose message already ends the previous one after a `": "` is skipped, since many
/// errors include their source in their own message (`#[error("...: {0}")]`).
pub fn describe_error(error: &(dyn Error + 'static)) -> String {
    let mut description = error.to_string();
    let mut previous = description.clone();
    let mut source = error.source();

    while let Some(cause) = source {
        let message = cause.to_string();
        if !message.is_empty() && !previous.ends_with(&format!(": {message}")) {
            description.push_str(": ");
            description.push_str(&message);
        }
        previous = message;
        source = cause.source();
    }

    description
}
