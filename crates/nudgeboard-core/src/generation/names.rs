//! Name generation utilities

use rand::Rng;

/// Generate a random display name
pub fn generate_name(rng: &mut impl Rng) -> String {
    let given = GIVEN_NAMES[rng.gen_range(0..GIVEN_NAMES.len())];
    let family = FAMILY_NAMES[rng.gen_range(0..FAMILY_NAMES.len())];

    format!("{given} {family}")
}

// Sample name lists - would be loaded from data files in production
static GIVEN_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Joseph", "Charles", "Mary",
    "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Sarah", "Wei", "Yuki",
    "Aisha", "Pavel", "Ingrid", "Carlos", "Fatima", "Kenji", "Olga", "Raj", "Amara", "Dmitri",
    "Elena", "Hassan", "Priya", "Sven", "Ming", "Akiko", "Omar", "Katya", "Diego", "Nadia",
    "Hiroshi", "Leila",
];

static FAMILY_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Chen", "Tanaka", "Okafor", "Ivanov", "Larsson", "Silva", "Rahman", "Sato",
    "Petrov", "Patel", "Dubois", "Novak", "Kim", "Nguyen", "Haddad", "Kowalski", "Moreau",
    "Fischer", "Ali", "Schmidt",
];
