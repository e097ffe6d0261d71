use clap::Args;
use serde::Serialize;

use holocron_core::{NewPerson, NewPlanet, NewUser};
use holocron_db::repo::{PersonRepo, PlanetRepo, UserRepo};
use holocron_db::DbPool;

use crate::infra::passwords::hash_password;

#[derive(Debug, Clone, Args)]
pub struct SeedArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SeedOutput {
    pub user_id: i64,
    pub user_created: bool,
    pub people_inserted: usize,
    pub planets_inserted: usize,
}

/// Creates the user unless the email is taken, and fills `people` and
/// `planets` only while they are empty.
pub async fn run(db: &DbPool, args: &SeedArgs) -> Result<SeedOutput, String> {
    let email = args.email.trim();
    let password = args.password.trim();
    if email.is_empty() || email.len() > 120 {
        return Err("invalid_email".to_string());
    }
    if password.is_empty() {
        return Err("invalid_password".to_string());
    }

    let users = UserRepo::new(db);
    let existing = users.get_by_email(email).await.map_err(seed_db_error)?;
    let (user_id, user_created) = match existing {
        Some(user) => {
            tracing::info!(event = "seed_user_exists", user_id = user.id);
            (user.id, false)
        }
        None => {
            let password = hash_password(password)?;
            let user_id = users
                .create(&NewUser {
                    email: email.to_string(),
                    password,
                    is_active: true,
                })
                .await
                .map_err(seed_db_error)?;
            (user_id, true)
        }
    };

    let people = PersonRepo::new(db);
    let mut people_inserted = 0;
    if people.count().await.map_err(seed_db_error)? == 0 {
        for person in sample_people() {
            people.create(&person).await.map_err(seed_db_error)?;
            people_inserted += 1;
        }
    }

    let planets = PlanetRepo::new(db);
    let mut planets_inserted = 0;
    if planets.count().await.map_err(seed_db_error)? == 0 {
        for planet in sample_planets() {
            planets.create(&planet).await.map_err(seed_db_error)?;
            planets_inserted += 1;
        }
    }

    tracing::info!(
        event = "seed_completed",
        user_id,
        user_created,
        people_inserted,
        planets_inserted
    );
    Ok(SeedOutput {
        user_id,
        user_created,
        people_inserted,
        planets_inserted,
    })
}

fn seed_db_error(err: sqlx_core::Error) -> String {
    tracing::error!(event = "seed_failed", error = %err, "DB error");
    "db_error".to_string()
}

fn person(
    name: &str,
    gender: &str,
    birth_year: &str,
    height: &str,
    hair_color: &str,
    eye_color: &str,
) -> NewPerson {
    NewPerson {
        name: name.to_string(),
        gender: Some(gender.to_string()),
        birth_year: Some(birth_year.to_string()),
        height: Some(height.to_string()),
        hair_color: Some(hair_color.to_string()),
        eye_color: Some(eye_color.to_string()),
    }
}

fn planet(
    name: &str,
    climate: &str,
    terrain: &str,
    population: &str,
    diameter: &str,
    gravity: &str,
) -> NewPlanet {
    NewPlanet {
        name: name.to_string(),
        climate: Some(climate.to_string()),
        terrain: Some(terrain.to_string()),
        population: Some(population.to_string()),
        diameter: Some(diameter.to_string()),
        gravity: Some(gravity.to_string()),
    }
}

fn sample_people() -> Vec<NewPerson> {
    vec![
        person("Luke Skywalker", "male", "19BBY", "172", "blond", "blue"),
        person("Leia Organa", "female", "19BBY", "150", "brown", "brown"),
        person("Han Solo", "male", "29BBY", "180", "brown", "brown"),
        person("Obi-Wan Kenobi", "male", "57BBY", "182", "auburn, white", "blue-gray"),
        NewPerson {
            name: "R2-D2".to_string(),
            gender: Some("n/a".to_string()),
            birth_year: Some("33BBY".to_string()),
            height: Some("96".to_string()),
            eye_color: Some("red".to_string()),
            ..NewPerson::default()
        },
    ]
}

fn sample_planets() -> Vec<NewPlanet> {
    vec![
        planet("Tatooine", "arid", "desert", "200000", "10465", "1 standard"),
        planet("Alderaan", "temperate", "grasslands, mountains", "2000000000", "12500", "1 standard"),
        planet("Hoth", "frozen", "tundra, ice caves, mountain ranges", "unknown", "7200", "1.1 standard"),
        planet("Dagobah", "murky", "swamp, jungles", "unknown", "8900", "N/A"),
    ]
}
