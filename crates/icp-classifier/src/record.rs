//! Output types: departments, stages, hierarchy levels and the
//! classification record itself.

use serde::{Deserialize, Serialize};

/// Organisational department a role is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Executive,
    Marketing,
    Sales,
    Technology,
    Finance,
    #[serde(rename = "HR")]
    HumanResources,
    Legal,
    Operations,
    Product,
    Projects,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Executive => "Executive",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Technology => "Technology",
            Department::Finance => "Finance",
            Department::HumanResources => "HR",
            Department::Legal => "Legal",
            Department::Operations => "Operations",
            Department::Product => "Product",
            Department::Projects => "Projects",
        }
    }

    /// Spanish display name used inside generated role labels.
    pub fn label(&self) -> &'static str {
        match self {
            Department::Executive => "dirección",
            Department::Marketing => "marketing",
            Department::Sales => "ventas",
            Department::Technology => "tecnología",
            Department::Finance => "finanzas",
            Department::HumanResources => "recursos humanos",
            Department::Legal => "legal",
            Department::Operations => "operaciones",
            Department::Product => "producto",
            Department::Projects => "proyectos",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline stage that produced a positive decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Owners,
    GeneralManagement,
    CSuite,
    GenericOverride,
    SoloTitle,
    StandaloneDepartment,
    ProjectManager,
    Department,
}

/// Seniority tier, independent of department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HierarchyLevel {
    CSuite,
    VpDirector,
    Manager,
    Lead,
    Specialist,
}

impl HierarchyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HierarchyLevel::CSuite => "C-Suite",
            HierarchyLevel::VpDirector => "VP/Director",
            HierarchyLevel::Manager => "Manager",
            HierarchyLevel::Lead => "Lead",
            HierarchyLevel::Specialist => "Specialist",
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Explanation of the decision path, serialised as a flat map with absent
/// keys omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Why {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_by: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub no_match: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seniority: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub c_suite_override: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub fast_path: bool,
}

impl Why {
    pub fn excluded() -> Self {
        Self {
            excluded_by: Some("external_excludes".to_string()),
            ..Default::default()
        }
    }

    pub fn no_match() -> Self {
        Self {
            no_match: true,
            ..Default::default()
        }
    }

    pub fn stage(stage: Stage, matched: impl Into<String>) -> Self {
        Self {
            stage: Some(stage),
            matched: Some(matched.into()),
            ..Default::default()
        }
    }
}

/// The structured result for one title.
///
/// When `is_icp` is false every taxonomy field is empty and `why` carries
/// the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub input: String,
    pub is_icp: bool,
    pub department: String,
    pub subdivision: String,
    pub hierarchy_level: String,
    pub role_generic: String,
    pub role_generic_singular: String,
    pub why: Why,
}

impl ClassificationRecord {
    /// A negative record with all taxonomy fields empty.
    pub fn rejected(input: &str, why: Why) -> Self {
        Self {
            input: input.to_string(),
            is_icp: false,
            department: String::new(),
            subdivision: String::new(),
            hierarchy_level: String::new(),
            role_generic: String::new(),
            role_generic_singular: String::new(),
            why,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_why_serialises_only_present_keys() {
        assert_eq!(serde_json::to_value(Why::no_match()).unwrap(), json!({"no_match": true}));
        assert_eq!(
            serde_json::to_value(Why::excluded()).unwrap(),
            json!({"excluded_by": "external_excludes"})
        );
        assert_eq!(
            serde_json::to_value(Why::stage(Stage::CSuite, "CEOs")).unwrap(),
            json!({"stage": "c_suite", "matched": "CEOs"})
        );
    }

    #[test]
    fn test_rejected_record_is_flat_and_empty() {
        let rec = ClassificationRecord::rejected("Astronaut", Why::no_match());
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["input"], "Astronaut");
        assert_eq!(v["is_icp"], false);
        assert_eq!(v["department"], "");
        assert_eq!(v["role_generic_singular"], "");
    }

    #[test]
    fn test_department_names() {
        assert_eq!(Department::HumanResources.as_str(), "HR");
        assert_eq!(serde_json::to_value(Department::HumanResources).unwrap(), json!("HR"));
        assert_eq!(Department::Technology.label(), "tecnología");
    }
}
