use crate::types::FieldType;

/// One column of a grid the model may filter or sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: FieldType,
    /// Permitted values for `list` fields; empty for every other type.
    pub allowed: &'static [&'static str],
}

impl FieldSpec {
    pub const fn string(name: &'static str) -> Self {
        Self::of(name, FieldType::String)
    }

    pub const fn number(name: &'static str) -> Self {
        Self::of(name, FieldType::Number)
    }

    pub const fn date(name: &'static str) -> Self {
        Self::of(name, FieldType::Date)
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self::of(name, FieldType::Boolean)
    }

    pub const fn list(name: &'static str, allowed: &'static [&'static str]) -> Self {
        Self {
            name,
            field_type: FieldType::List,
            allowed,
        }
    }

    const fn of(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            allowed: &[],
        }
    }

    /// Case-insensitive membership test against the allowed values.
    pub fn allows(&self, value: &str) -> bool {
        self.allowed
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(value.trim()))
    }
}

/// A worked example shown to the model: a query and the filter it should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptExample {
    pub prompt: &'static str,
    pub output: &'static str,
}

/// The fixed field table and prompt material for one business domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainSchema {
    /// Short identifier used in logs, e.g. `banking`.
    pub name: &'static str,
    /// HTTP path the domain is served under.
    pub route: &'static str,
    pub fields: &'static [FieldSpec],
    /// Domain-specific value conventions appended to the type list.
    pub notes: &'static [&'static str],
    pub examples: &'static [PromptExample],
}

impl DomainSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}
