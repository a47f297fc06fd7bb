//! Person fixtures.

use benefitgraph_core::Person;

/// Employed household head: 40 hours a week outside the home, 50,000 a year.
pub fn user() -> Person {
    Person::default_employed().with("name", "Ana Garcia")
}

/// Unemployed spouse.
pub fn spouse() -> Person {
    Person::default_unemployed()
        .with("name", "Ben Garcia")
        .with("relation", "spouse")
}

/// Dependent child of the given age. The school level stays at the template's pre-k.
pub fn child(age: i64) -> Person {
    Person::default_child()
        .with("name", "Leo Garcia")
        .with("age", age)
}

/// Elderly relative who depends on the household.
pub fn adult_dependent() -> Person {
    Person::default_adult_dependent().with("name", "Rosa Garcia")
}
