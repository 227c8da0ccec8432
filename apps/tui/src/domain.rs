use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Open,
    Closed,
    Unsolved,
    Critical,
}

impl CaseStatus {
    pub const ALL: [Self; 4] = [Self::Open, Self::Closed, Self::Unsolved, Self::Critical];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Unsolved => "unsolved",
            Self::Critical => "critical",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Unsolved => "Unsolved",
            Self::Critical => "Critical",
        }
    }
}

/// Crime categories, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Theft,
    Assault,
    Vandalism,
    Fraud,
    Burglary,
    #[serde(rename = "Drug-related")]
    DrugRelated,
    #[serde(rename = "Public Disturbance")]
    PublicDisturbance,
    #[serde(rename = "Cyber Crime")]
    CyberCrime,
    #[serde(rename = "Vehicle Theft")]
    VehicleTheft,
    #[serde(rename = "Property Damage")]
    PropertyDamage,
}

impl Category {
    pub const ALL: [Self; 10] = [
        Self::Theft,
        Self::Assault,
        Self::Vandalism,
        Self::Fraud,
        Self::Burglary,
        Self::DrugRelated,
        Self::PublicDisturbance,
        Self::CyberCrime,
        Self::VehicleTheft,
        Self::PropertyDamage,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Theft => "Theft",
            Self::Assault => "Assault",
            Self::Vandalism => "Vandalism",
            Self::Fraud => "Fraud",
            Self::Burglary => "Burglary",
            Self::DrugRelated => "Drug-related",
            Self::PublicDisturbance => "Public Disturbance",
            Self::CyberCrime => "Cyber Crime",
            Self::VehicleTheft => "Vehicle Theft",
            Self::PropertyDamage => "Property Damage",
        }
    }

    /// Advice shown on the case detail screen.
    pub const fn safety_advice(self) -> &'static str {
        match self {
            Self::Theft => "Residents are advised to secure their belongings and lock doors and windows when leaving home.",
            Self::Assault => "Residents are advised to avoid the area during late hours and travel in groups when possible.",
            Self::Vandalism => "Residents are advised to report any suspicious activity in the area immediately.",
            Self::Fraud => "Residents are advised to be vigilant about sharing personal information and to monitor their financial accounts.",
            Self::Burglary => "Residents are advised to ensure proper lighting around homes and consider security systems.",
            _ => "Residents are advised to remain vigilant and report any suspicious activity to local authorities.",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_wire_names() {
        let labels = CaseStatus::ALL.map(CaseStatus::label);
        assert_eq!(labels, ["Open", "Closed", "Unsolved", "Critical"]);
        assert_eq!(CaseStatus::Critical.to_string(), "critical");
        assert_eq!(Category::DrugRelated.to_string(), "Drug-related");
        assert_eq!(Category::ALL.len(), 10);
    }

    #[test]
    fn categories_serialize_as_labels() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&Category::PublicDisturbance)?;
        assert_eq!(json, "\"Public Disturbance\"");
        let status = serde_json::to_string(&CaseStatus::Unsolved)?;
        assert_eq!(status, "\"unsolved\"");
        Ok(())
    }

    #[test]
    fn only_five_categories_have_specific_advice() {
        let generic = Category::CyberCrime.safety_advice();
        let specific = Category::ALL
            .into_iter()
            .filter(|category| category.safety_advice() != generic)
            .count();
        assert_eq!(specific, 5);
    }
}
