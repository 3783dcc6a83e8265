//! Impact counter business logic - Site-wide figures shown on the home, about, and impacts pages.
//!
//! Counters are looked up leniently: a figure the site expects but nobody has
//! entered yet reads as zero instead of failing the page.

use crate::{
    config::site::SiteConfig,
    entities::{ImpactCounter, impact_counter},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{debug, info};

/// One labelled figure of the impact snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactFigure {
    /// Display label, e.g. `"Meals Served"`
    pub label: String,
    /// Counter value
    pub value: i64,
    /// Icon identifier
    pub icon_class: String,
}

/// The four headline figures shown on the about page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedImpact {
    /// Value of the meals served counter
    pub meals_served: i64,
    /// Value of the trees planted counter
    pub trees_planted: i64,
    /// Value of the families helped counter
    pub families_helped: i64,
    /// Value of the projects funded counter
    pub projects_funded: i64,
}

/// Turns a counter name into its display label.
///
/// Each run of letters is capitalized (first letter upper, rest lower) and
/// underscores become spaces, so `"total_donations"` reads `"Total Donations"`.
#[must_use]
pub fn format_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len());
    let mut previous_is_letter = false;

    for c in name.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                label.extend(c.to_lowercase());
            } else {
                label.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            label.push(if c == '_' { ' ' } else { c });
            previous_is_letter = false;
        }
    }

    label
}

fn normalize(name: &str) -> String {
    name.replace('_', " ").to_lowercase()
}

/// Creates a new impact counter.
pub async fn create_impact_counter<C>(
    db: &C,
    name: &str,
    value: i64,
    icon_class: &str,
) -> Result<impact_counter::Model>
where
    C: ConnectionTrait,
{
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Impact counter name cannot be empty".to_string(),
        });
    }

    if value < 0 {
        return Err(Error::Validation {
            message: format!("Impact counter value cannot be negative: {value}"),
        });
    }

    let now = chrono::Utc::now();
    let counter = impact_counter::ActiveModel {
        name: Set(name.trim().to_string()),
        value: Set(value),
        icon_class: Set(icon_class.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    counter.insert(db).await.map_err(Into::into)
}

/// All counters, ordered by name.
pub async fn list_impact_counters<C>(db: &C) -> Result<Vec<impact_counter::Model>>
where
    C: ConnectionTrait,
{
    ImpactCounter::find()
        .order_by_asc(impact_counter::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Every counter as a labelled figure, in insertion order.
///
/// Counters whose names format to the same label collapse into one figure
/// holding the value of the later row.
pub async fn impact_snapshot<C>(db: &C) -> Result<Vec<ImpactFigure>>
where
    C: ConnectionTrait,
{
    let counters = ImpactCounter::find()
        .order_by_asc(impact_counter::Column::Id)
        .all(db)
        .await?;

    let mut figures: Vec<ImpactFigure> = Vec::with_capacity(counters.len());
    for counter in counters {
        let label = format_label(&counter.name);
        if let Some(existing) = figures.iter_mut().find(|f| f.label == label) {
            existing.value = counter.value;
            existing.icon_class = counter.icon_class;
        } else {
            figures.push(ImpactFigure {
                label,
                value: counter.value,
                icon_class: counter.icon_class,
            });
        }
    }

    Ok(figures)
}

/// The four headline figures.
///
/// Each is the first counter whose name contains the figure's name,
/// ignoring case and treating underscores as spaces. Missing counters read as 0.
pub async fn fixed_impact<C>(db: &C) -> Result<FixedImpact>
where
    C: ConnectionTrait,
{
    let counters = ImpactCounter::find()
        .order_by_asc(impact_counter::Column::Id)
        .all(db)
        .await?;

    let lookup = |wanted: &str| -> i64 {
        let wanted = normalize(wanted);
        counters
            .iter()
            .find(|c| normalize(&c.name).contains(&wanted))
            .map_or(0, |c| c.value)
    };

    Ok(FixedImpact {
        meals_served: lookup("Meals Served"),
        trees_planted: lookup("Trees Planted"),
        families_helped: lookup("Families Helped"),
        projects_funded: lookup("Projects Funded"),
    })
}

/// Inserts the configured counters that do not exist yet.
///
/// Existing counters keep their current values. Returns how many were inserted.
pub async fn seed_impact_counters(db: &DatabaseConnection, config: &SiteConfig) -> Result<usize> {
    info!(
        "Seeding impact counters. Found {} configurations from TOML.",
        config.impact_counters.len()
    );

    let mut inserted = 0;
    for entry in &config.impact_counters {
        let exists = ImpactCounter::find()
            .filter(impact_counter::Column::Name.eq(entry.name.trim()))
            .one(db)
            .await?
            .is_some();

        if exists {
            debug!("Impact counter '{}' already exists. Skipping.", entry.name);
            continue;
        }

        create_impact_counter(db, &entry.name, entry.value, &entry.icon_class).await?;
        inserted += 1;
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::site::ImpactCounterConfig;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("meals_served"), "Meals Served");
        assert_eq!(format_label("total_donations"), "Total Donations");
        assert_eq!(format_label("Trees Planted"), "Trees Planted");
        assert_eq!(format_label("FAMILIES helped"), "Families Helped");
        assert_eq!(format_label("co2_offset"), "Co2 Offset");
        assert_eq!(format_label(""), "");
    }

    #[tokio::test]
    async fn test_create_impact_counter_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_impact_counter(&db, "  ", 1, "").await;
        assert!(matches!(result, Err(Error::Validation { .. })));

        let result = create_impact_counter(&db, "meals_served", -1, "").await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_impact_snapshot_labels_every_counter() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_counter(&db, "meals_served", 1200).await?;
        create_test_counter(&db, "Trees Planted", 300).await?;

        let snapshot = impact_snapshot(&db).await?;
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].label, "Meals Served");
        assert_eq!(snapshot[0].value, 1200);
        assert_eq!(snapshot[1].label, "Trees Planted");
        assert_eq!(snapshot[1].value, 300);
        Ok(())
    }

    #[tokio::test]
    async fn test_impact_snapshot_empty() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(impact_snapshot(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_fixed_impact_defaults_missing_to_zero() -> Result<()> {
        let db = setup_test_db().await?;
        assert_eq!(fixed_impact(&db).await?, FixedImpact::default());

        create_test_counter(&db, "Meals Served", 5000).await?;
        create_test_counter(&db, "families_helped", 42).await?;

        let impact = fixed_impact(&db).await?;
        assert_eq!(impact.meals_served, 5000);
        assert_eq!(impact.trees_planted, 0);
        assert_eq!(impact.families_helped, 42);
        assert_eq!(impact.projects_funded, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_fixed_impact_matches_by_substring() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_counter(&db, "Total Trees Planted (2024)", 77).await?;

        let impact = fixed_impact(&db).await?;
        assert_eq!(impact.trees_planted, 77);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_impact_counters_skips_existing() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_counter(&db, "meals_served", 900).await?;

        let config = SiteConfig {
            impact_counters: vec![
                ImpactCounterConfig {
                    name: "meals_served".to_string(),
                    value: 0,
                    icon_class: "bi-egg-fried".to_string(),
                },
                ImpactCounterConfig {
                    name: "trees_planted".to_string(),
                    value: 10,
                    icon_class: "bi-tree".to_string(),
                },
            ],
            ..Default::default()
        };

        assert_eq!(seed_impact_counters(&db, &config).await?, 1);
        // Seeding again inserts nothing
        assert_eq!(seed_impact_counters(&db, &config).await?, 0);

        let counters = list_impact_counters(&db).await?;
        assert_eq!(counters.len(), 2);
        assert_eq!(counters[0].name, "meals_served");
        assert_eq!(counters[0].value, 900);
        assert_eq!(counters[1].name, "trees_planted");
        assert_eq!(counters[1].value, 10);
        Ok(())
    }
}
