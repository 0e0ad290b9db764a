use sea_orm::{ConnectionTrait, Statement};
use superheroes::domain::{DomainError, NewHeroPower, Strength};
use superheroes::infrastructure::{AppState, db, seed};

// Helper to create a test app state
async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

const FLIGHT: &str = "gives the wielder the ability to fly through the skies";

async fn count_hero_powers(state: &AppState) -> i64 {
    let row = state
        .db()
        .query_one(Statement::from_string(
            state.db().get_database_backend(),
            "SELECT COUNT(*) AS n FROM hero_powers".to_owned(),
        ))
        .await
        .expect("count query")
        .expect("count row");
    row.try_get::<i64>("", "n").expect("count value")
}

#[tokio::test]
async fn test_power_create_enforces_field_rules() {
    let state = setup_test_state().await;

    let err = state
        .power_repo
        .create("".to_string(), "short".to_string())
        .await
        .unwrap_err();
    match err {
        DomainError::Validation(errors) => assert_eq!(errors.len(), 2),
        other => panic!("expected validation error, got {:?}", other),
    }

    assert!(state.power_repo.find_all().await.unwrap().is_empty());

    let power = state
        .power_repo
        .create("flight".to_string(), FLIGHT.to_string())
        .await
        .unwrap();
    assert_eq!(state.power_repo.find_by_id(power.id).await.unwrap(), Some(power));
}

#[tokio::test]
async fn test_schema_rejects_short_description_written_directly() {
    let state = setup_test_state().await;

    let result = state
        .db()
        .execute(Statement::from_string(
            state.db().get_database_backend(),
            "INSERT INTO powers (name, description) VALUES ('x', 'too short')".to_owned(),
        ))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_hero_power_with_dangling_reference_is_constraint_violation() {
    let state = setup_test_state().await;
    let hero = state
        .hero_repo
        .create("Kamala Khan".to_string(), "Ms. Marvel".to_string())
        .await
        .unwrap();

    let err = state
        .hero_power_repo
        .create(NewHeroPower {
            hero_id: hero.id,
            power_id: 999,
            strength: Strength::Strong,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::ConstraintViolation(_)));
    assert_eq!(count_hero_powers(&state).await, 0);
}

#[tokio::test]
async fn test_update_description_is_visible_to_next_read() {
    let state = setup_test_state().await;
    let power = state
        .power_repo
        .create("flight".to_string(), FLIGHT.to_string())
        .await
        .unwrap();

    let new_description = "soars above the clouds daily".to_string();
    let updated = state
        .power_repo
        .update_description(power.id, new_description.clone())
        .await
        .unwrap();
    assert_eq!(updated.description, new_description);

    let reread = state.power_repo.find_by_id(power.id).await.unwrap().unwrap();
    assert_eq!(reread.description, new_description);

    // Too short: rolled back, previous value kept
    let err = state
        .power_repo
        .update_description(power.id, "nope".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    let reread = state.power_repo.find_by_id(power.id).await.unwrap().unwrap();
    assert_eq!(reread.description, new_description);

    let err = state
        .power_repo
        .update_description(999, new_description)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound("Power")));
}

#[tokio::test]
async fn test_many_to_many_views_and_lookups() {
    let state = setup_test_state().await;
    let hero = state
        .hero_repo
        .create("Gwen Stacy".to_string(), "Spider-Gwen".to_string())
        .await
        .unwrap();
    let other = state
        .hero_repo
        .create("Ororo Munroe".to_string(), "Storm".to_string())
        .await
        .unwrap();
    let flight = state
        .power_repo
        .create("flight".to_string(), FLIGHT.to_string())
        .await
        .unwrap();
    let senses = state
        .power_repo
        .create(
            "super human senses".to_string(),
            "allows the wielder to use her senses at a super-human level".to_string(),
        )
        .await
        .unwrap();

    for (hero_id, power_id, strength) in [
        (hero.id, flight.id, Strength::Strong),
        (hero.id, senses.id, Strength::Weak),
        (other.id, flight.id, Strength::Average),
    ] {
        state
            .hero_power_repo
            .create(NewHeroPower {
                hero_id,
                power_id,
                strength,
            })
            .await
            .unwrap();
    }

    let powers = state.hero_repo.find_powers(hero.id).await.unwrap();
    assert_eq!(powers, vec![flight.clone(), senses.clone()]);

    let heroes = state.power_repo.find_heroes(flight.id).await.unwrap();
    assert_eq!(heroes, vec![hero.clone(), other.clone()]);

    let links = state.hero_power_repo.find_by_hero(hero.id).await.unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].0.strength, Strength::Strong);
    assert_eq!(links[0].1, flight);
    assert_eq!(links[1].1, senses);

    let by_power = state.hero_power_repo.find_by_power(flight.id).await.unwrap();
    assert_eq!(by_power.len(), 2);
    assert!(by_power.iter().all(|link| link.power_id == flight.id));
}

#[tokio::test]
async fn test_deleting_parents_cascades_to_associations() {
    let state = setup_test_state().await;
    let hero = state
        .hero_repo
        .create("Jean Grey".to_string(), "Dark Phoenix".to_string())
        .await
        .unwrap();
    let flight = state
        .power_repo
        .create("flight".to_string(), FLIGHT.to_string())
        .await
        .unwrap();
    let strength = state
        .power_repo
        .create(
            "super strength".to_string(),
            "gives the wielder super-human strengths".to_string(),
        )
        .await
        .unwrap();

    for power_id in [flight.id, strength.id] {
        state
            .hero_power_repo
            .create(NewHeroPower {
                hero_id: hero.id,
                power_id,
                strength: Strength::Average,
            })
            .await
            .unwrap();
    }
    assert_eq!(count_hero_powers(&state).await, 2);

    state.power_repo.delete(flight.id).await.unwrap();
    assert_eq!(count_hero_powers(&state).await, 1);
    assert!(state.hero_power_repo.find_by_power(flight.id).await.unwrap().is_empty());

    state.hero_repo.delete(hero.id).await.unwrap();
    assert_eq!(count_hero_powers(&state).await, 0);

    let err = state.hero_repo.delete(hero.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound("Hero")));
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let state = setup_test_state().await;

    seed::seed_demo_data(&state).await.unwrap();
    let heroes = state.hero_repo.find_all().await.unwrap();
    let powers = state.power_repo.find_all().await.unwrap();
    assert_eq!(heroes.len(), 10);
    assert_eq!(powers.len(), 4);
    assert_eq!(count_hero_powers(&state).await, 10);

    seed::seed_demo_data(&state).await.unwrap();
    assert_eq!(state.hero_repo.find_all().await.unwrap().len(), 10);
    assert_eq!(count_hero_powers(&state).await, 10);
}
