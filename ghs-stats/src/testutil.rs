//! Record fixtures shared by unit tests.

use ghs_data::{Dataset, Gender, Record};

pub fn record(country: &str, disease: &str, year: i32, gender: Gender) -> Record {
    Record {
        country: country.to_string(),
        disease_name: disease.to_string(),
        year,
        gender,
        mortality_rate: 5.0,
        recovery_rate: 70.0,
        incidence_rate: 10.0,
        population_affected: 1000,
        treatment_type: "Medication".to_string(),
        healthcare_access: 60.0,
        per_capita_income_usd: 10000.0,
        age_group: "19-35".to_string(),
        improvement_in_5_years: 3.0,
    }
}

/// Twelve rows over three countries, three diseases and 2000-2003.
pub fn sample_dataset() -> Dataset {
    let rows = vec![
        Record {
            mortality_rate: 8.0,
            recovery_rate: 60.0,
            population_affected: 5000,
            age_group: "0-18".into(),
            ..record("India", "Malaria", 2000, Gender::Male)
        },
        Record {
            mortality_rate: 6.0,
            recovery_rate: 64.0,
            population_affected: 7000,
            age_group: "19-35".into(),
            ..record("India", "Malaria", 2001, Gender::Female)
        },
        Record {
            mortality_rate: 2.0,
            recovery_rate: 90.0,
            population_affected: 3000,
            treatment_type: "Vaccination".into(),
            ..record("India", "Influenza", 2002, Gender::Other)
        },
        Record {
            mortality_rate: 3.0,
            recovery_rate: 88.0,
            population_affected: 2000,
            treatment_type: "Vaccination".into(),
            age_group: "61+".into(),
            ..record("India", "Influenza", 2003, Gender::Male)
        },
        Record {
            mortality_rate: 9.0,
            recovery_rate: 55.0,
            population_affected: 1500,
            treatment_type: "Surgery".into(),
            ..record("Brazil", "Cholera", 2000, Gender::Female)
        },
        Record {
            mortality_rate: 7.0,
            recovery_rate: 58.0,
            population_affected: 2500,
            treatment_type: "Surgery".into(),
            age_group: "36-60".into(),
            ..record("Brazil", "Cholera", 2001, Gender::Male)
        },
        Record {
            mortality_rate: 4.0,
            recovery_rate: 80.0,
            population_affected: 4000,
            ..record("Brazil", "Malaria", 2002, Gender::Male)
        },
        Record {
            mortality_rate: 1.0,
            recovery_rate: 95.0,
            population_affected: 1000,
            treatment_type: "Vaccination".into(),
            age_group: "61+".into(),
            ..record("Brazil", "Influenza", 2003, Gender::Female)
        },
        Record {
            mortality_rate: 5.0,
            recovery_rate: 75.0,
            population_affected: 6000,
            healthcare_access: 85.0,
            per_capita_income_usd: 40000.0,
            ..record("Canada", "Influenza", 2000, Gender::Male)
        },
        Record {
            mortality_rate: 6.5,
            recovery_rate: 72.0,
            population_affected: 800,
            healthcare_access: 90.0,
            per_capita_income_usd: 42000.0,
            age_group: "0-18".into(),
            ..record("Canada", "Cholera", 2001, Gender::Female)
        },
        Record {
            mortality_rate: 3.5,
            recovery_rate: 85.0,
            population_affected: 1200,
            healthcare_access: 88.0,
            per_capita_income_usd: 41000.0,
            ..record("Canada", "Malaria", 2002, Gender::Other)
        },
        Record {
            mortality_rate: 2.5,
            recovery_rate: 91.0,
            population_affected: 900,
            healthcare_access: 92.0,
            per_capita_income_usd: 43000.0,
            age_group: "36-60".into(),
            ..record("Canada", "Influenza", 2003, Gender::Male)
        },
    ];
    Dataset::from_records(rows).expect("sample dataset is not empty")
}
