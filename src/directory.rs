use crate::models::EsgRecord;
use std::collections::HashMap;

/// Ordered, read-only mapping from company name to its ESG metrics.
///
/// Built once at startup and shared behind an `Arc`. Names are unique and
/// matched exactly (case-sensitive) after trimming surrounding whitespace
/// from the requested name.
#[derive(Debug, Clone)]
pub struct CompanyDirectory {
    entries: Vec<(String, EsgRecord)>,
    index: HashMap<String, usize>,
}

impl CompanyDirectory {
    /// Builds a directory from `(name, record)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Fails if a name is empty, padded with whitespace or duplicated, or if a
    /// record holds a negative/non-finite carbon footprint or a score above 100.
    pub fn from_entries<I, S>(entries: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (S, EsgRecord)>,
        S: Into<String>,
    {
        let mut ordered = Vec::new();
        let mut index = HashMap::new();

        for (name, record) in entries {
            let name = name.into();
            if name.trim().is_empty() {
                anyhow::bail!("Company name cannot be empty");
            }
            if name.trim() != name {
                anyhow::bail!("Company name '{}' has surrounding whitespace", name);
            }
            validate_record(&name, &record)?;
            if index.insert(name.clone(), ordered.len()).is_some() {
                anyhow::bail!("Duplicate company name '{}'", name);
            }
            ordered.push((name, record));
        }

        Ok(Self {
            entries: ordered,
            index,
        })
    }

    /// The built-in dataset served by the API.
    pub fn seeded() -> anyhow::Result<Self> {
        Self::from_entries(seed_entries())
    }

    /// Company names in insertion order.
    pub fn list_companies(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Looks up a company by name, returning the canonical name with its record.
    pub fn get_record(&self, name: &str) -> Option<(&str, &EsgRecord)> {
        let idx = *self.index.get(name.trim())?;
        let (name, record) = &self.entries[idx];
        Some((name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_record(name: &str, record: &EsgRecord) -> anyhow::Result<()> {
    if !record.carbon_footprint.is_finite() || record.carbon_footprint < 0.0 {
        anyhow::bail!(
            "Company '{}' has invalid carbon_footprint {}",
            name,
            record.carbon_footprint
        );
    }

    let scores = [
        ("energy_efficiency", record.energy_efficiency),
        ("waste_management", record.waste_management),
        ("employee_diversity", record.employee_diversity),
        ("board_diversity", record.board_diversity),
        ("compliance_score", record.compliance_score),
    ];
    for (field, value) in scores {
        if value > 100 {
            anyhow::bail!("Company '{}' has {} {} above 100", name, field, value);
        }
    }

    Ok(())
}

fn seed_entries() -> [(&'static str, EsgRecord); 5] {
    [
        (
            "Infosys Limited",
            EsgRecord {
                carbon_footprint: 50.3,
                energy_efficiency: 85,
                waste_management: 90,
                employee_diversity: 45,
                board_diversity: 30,
                compliance_score: 95,
            },
        ),
        (
            "Tata Steel Limited",
            EsgRecord {
                carbon_footprint: 70.1,
                energy_efficiency: 80,
                waste_management: 88,
                employee_diversity: 42,
                board_diversity: 35,
                compliance_score: 90,
            },
        ),
        (
            "BSE Limited",
            EsgRecord {
                carbon_footprint: 40.5,
                energy_efficiency: 90,
                waste_management: 93,
                employee_diversity: 50,
                board_diversity: 25,
                compliance_score: 97,
            },
        ),
        (
            "Reliance Industries",
            EsgRecord {
                carbon_footprint: 95.2,
                energy_efficiency: 70,
                waste_management: 85,
                employee_diversity: 38,
                board_diversity: 28,
                compliance_score: 88,
            },
        ),
        (
            "HDFC Bank",
            EsgRecord {
                carbon_footprint: 30.0,
                energy_efficiency: 92,
                waste_management: 95,
                employee_diversity: 55,
                board_diversity: 40,
                compliance_score: 99,
            },
        ),
    ]
}
