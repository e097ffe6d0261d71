use holocron_core::{NewPerson, NewPlanet, NewUser};
use holocron_db::repo::{PersonRepo, PlanetRepo, UserRepo};
use holocron_db::{connect_with_max, migrate, Backend, DbPool};

async fn setup_db() -> DbPool {
    // A single connection keeps every query on the same in-memory database.
    let pool = connect_with_max("sqlite::memory:", 1)
        .await
        .expect("connect sqlite");
    migrate(&pool).await.expect("migrate");
    pool
}

fn person(name: &str) -> NewPerson {
    NewPerson {
        name: name.to_string(),
        gender: Some("female".to_string()),
        birth_year: Some("19BBY".to_string()),
        ..NewPerson::default()
    }
}

fn planet(name: &str) -> NewPlanet {
    NewPlanet {
        name: name.to_string(),
        climate: Some("arid".to_string()),
        ..NewPlanet::default()
    }
}

#[tokio::test]
async fn sqlite_url_selects_sqlite_backend() {
    let pool = setup_db().await;
    assert_eq!(pool.backend(), Backend::Sqlite);
    pool.ping().await.expect("ping");
}

#[tokio::test]
async fn migrate_is_idempotent() {
    let pool = setup_db().await;
    migrate(&pool).await.expect("second migrate");
    assert_eq!(PersonRepo::new(&pool).count().await.expect("count"), 0);
}

#[tokio::test]
async fn person_repo_create_get_and_list() {
    let pool = setup_db().await;
    let repo = PersonRepo::new(&pool);

    let luke = repo.create(&person("Luke")).await.expect("create luke");
    let leia = repo.create(&person("Leia")).await.expect("create leia");
    assert!(leia > luke);

    let fetched = repo
        .get_by_id(leia)
        .await
        .expect("get leia")
        .expect("leia exists");
    assert_eq!(fetched.name, "Leia");
    assert_eq!(fetched.gender.as_deref(), Some("female"));
    assert_eq!(fetched.height, None);

    assert!(repo.get_by_id(9_999).await.expect("get missing").is_none());

    let names: Vec<_> = repo
        .list()
        .await
        .expect("list")
        .into_iter()
        .map(|person| person.name)
        .collect();
    assert_eq!(names, vec!["Luke", "Leia"]);
    assert_eq!(repo.count().await.expect("count"), 2);
}

#[tokio::test]
async fn list_first_respects_limit_and_order() {
    let pool = setup_db().await;
    let people = PersonRepo::new(&pool);
    let planets = PlanetRepo::new(&pool);

    for name in ["Luke", "Leia", "Han", "Chewbacca"] {
        people.create(&person(name)).await.expect("create person");
    }
    planets.create(&planet("Tatooine")).await.expect("create planet");

    let first: Vec<_> = people
        .list_first(2)
        .await
        .expect("list first")
        .into_iter()
        .map(|person| person.name)
        .collect();
    assert_eq!(first, vec!["Luke", "Leia"]);

    let planet_rows = planets.list_first(2).await.expect("list first planets");
    assert_eq!(planet_rows.len(), 1);
    assert_eq!(planet_rows[0].name, "Tatooine");

    assert!(people.list_first(0).await.expect("empty limit").is_empty());
}

#[tokio::test]
async fn planet_repo_get_by_id() {
    let pool = setup_db().await;
    let repo = PlanetRepo::new(&pool);

    let id = repo.create(&planet("Alderaan")).await.expect("create");
    let fetched = repo.get_by_id(id).await.expect("get").expect("exists");
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.climate.as_deref(), Some("arid"));
    assert_eq!(fetched.terrain, None);
    assert_eq!(repo.list().await.expect("list").len(), 1);
}

#[tokio::test]
async fn user_repo_round_trips_and_enforces_unique_email() {
    let pool = setup_db().await;
    let repo = UserRepo::new(&pool);

    let user = NewUser {
        email: "luke@rebellion.org".to_string(),
        password: "$argon2id$stub".to_string(),
        is_active: true,
    };
    let id = repo.create(&user).await.expect("create user");

    let fetched = repo.get_by_id(id).await.expect("get").expect("exists");
    assert_eq!(fetched.email, "luke@rebellion.org");
    assert!(fetched.is_active);

    let by_email = repo
        .get_by_email("luke@rebellion.org")
        .await
        .expect("get by email")
        .expect("exists");
    assert_eq!(by_email.id, id);

    assert!(repo.create(&user).await.is_err());
    assert_eq!(repo.count().await.expect("count"), 1);
    assert_eq!(repo.list().await.expect("list").len(), 1);
}
