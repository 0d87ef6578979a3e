//! Template helper functions for code generation
//!
//! Naming and parameter-list helpers used to build the template context.

/// Template helpers for code generation
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Name of the generated store type
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::store_name("User"), "UserCRUD");
    /// ```
    #[must_use]
    pub fn store_name(model: &str) -> String {
        format!("{model}CRUD")
    }

    /// Join leading parameters and field names into a comma separated list
    ///
    /// Empty field lists leave no dangling separator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::TemplateHelpers;
    /// let fields = vec!["name".to_string(), "email".to_string()];
    /// assert_eq!(TemplateHelpers::parameter_list(&["self"], &fields), "self, name, email");
    /// assert_eq!(TemplateHelpers::parameter_list(&["self", "id"], &[]), "self, id");
    /// ```
    #[must_use]
    pub fn parameter_list(leading: &[&str], fields: &[String]) -> String {
        leading
            .iter()
            .copied()
            .chain(fields.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
