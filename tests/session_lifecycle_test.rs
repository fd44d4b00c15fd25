//! Session lifecycle tests.
//!
//! These drive a whole session through the public API: care actions, manual
//! and scheduled ticks, expiry and shutdown.

use std::time::Duration;

use tokio::time::timeout;

use virtual_pet::{
    ClockState, Mood, PetError, PetSession, PetState, Portion, SessionOptions, Species, StopCause,
    TickOutcome,
};

const TEST_TIMEOUT: Duration = Duration::from_secs(24 * 3600);

fn options(seed: u64) -> SessionOptions {
    SessionOptions {
        interval: Duration::from_millis(7500),
        seed: Some(seed),
    }
}

#[tokio::test(start_paused = true)]
async fn test_rex_lives_and_passes_out() {
    let mut session = PetSession::with_options(PetState::new("rex", Species::Dog), options(11));

    // Feeding a pet that is not hungry leaves hunger at zero.
    assert_eq!(session.feed(Portion::Fixed).unwrap(), 0);
    assert_eq!(session.snapshot().unwrap().hunger(), 0);

    let mut expiries = Vec::new();
    let mut ticks = 0;
    loop {
        ticks += 1;
        assert!(ticks < 10_000, "pet never passed out");
        match session.tick_now().unwrap() {
            TickOutcome::Alive(mood) => assert!(!mood.is_terminal()),
            TickOutcome::Expired(expiry) => {
                expiries.push(expiry);
                break;
            }
            TickOutcome::Stopped => panic!("clock stopped before the pet passed out"),
        }
    }

    let pet = session.snapshot().unwrap();
    assert!(pet.mood_factor() >= 95);
    assert_eq!(pet.mood(), Mood::PassedOut);
    assert_eq!(
        session.clock_state().unwrap(),
        ClockState::Stopped(StopCause::Expired)
    );

    // Further ticks change nothing and never notify again.
    assert_eq!(session.tick_now().unwrap(), TickOutcome::Stopped);
    assert_eq!(session.snapshot().unwrap(), pet);
    assert!(!session.stop_clock().unwrap());

    let expiry = session.expired().await.expect("one expiry notice");
    assert_eq!(expiry.name, "Rex");
    assert_eq!(expiry.species, Species::Dog);
    assert_eq!(expiries, vec![expiry]);
    assert_eq!(session.expired().await, None);

    assert!(matches!(
        session.feed(Portion::Fixed),
        Err(PetError::PetExpired { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_background_clock_expires_pet() {
    let mut session = PetSession::with_options(
        PetState::with_levels("rex", Species::Dog, 46, 46),
        options(4),
    );

    let expiry = timeout(TEST_TIMEOUT, session.expired())
        .await
        .expect("pet should pass out")
        .expect("expiry notice should be sent");

    assert_eq!(expiry.name, "Rex");
    assert_eq!(
        session.clock_state().unwrap(),
        ClockState::Stopped(StopCause::Expired)
    );
}

#[tokio::test(start_paused = true)]
async fn test_care_keeps_pet_alive() {
    let mut session = PetSession::with_options(PetState::new("polly", Species::Parrot), options(8));

    // Each tick adds at most 4 to each counter and at most one tick lands
    // between two rounds of care, so both counters keep returning to zero.
    for _ in 0..600 {
        tokio::time::sleep(Duration::from_millis(2500)).await;
        session.feed(Portion::Custom(6)).unwrap();
        session.play(Portion::Custom(6)).unwrap();
    }

    let report = session.status_report().unwrap();
    assert!(report.hunger < 5 && report.boredom < 5, "{report}");
    assert_eq!(session.clock_state().unwrap(), ClockState::Running);

    assert!(session.stop_clock().unwrap());
    assert_eq!(session.expired().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_stop_freezes_pet() {
    let mut session = PetSession::with_options(PetState::new("rex", Species::Dog), options(2));

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(session.stop_clock().unwrap());
    let frozen = session.status_report().unwrap();

    tokio::time::sleep(Duration::from_secs(3600)).await;
    assert_eq!(session.status_report().unwrap(), frozen);
    assert_eq!(
        session.clock_state().unwrap(),
        ClockState::Stopped(StopCause::Halted)
    );
    assert!(!session.stop_clock().unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_negative_amounts_rejected() {
    let session = PetSession::with_options(
        PetState::with_levels("rex", Species::Dog, 10, 10),
        options(1),
    );

    let err = session.play(Portion::Custom(-5)).unwrap_err();
    assert!(matches!(err, PetError::InvalidAmount { action: "play", amount: -5 }));
    assert_eq!(session.snapshot().unwrap().boredom(), 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_care_and_ticks() {
    let session = std::sync::Arc::new(PetSession::with_options(
        PetState::with_levels("rex", Species::Dog, 40, 40),
        SessionOptions {
            interval: Duration::from_millis(1),
            seed: Some(3),
        },
    ));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let session = std::sync::Arc::clone(&session);
        handles.push(tokio::spawn(async move {
            for _ in 0..50 {
                let _ = session.feed(Portion::Random);
                let _ = session.play(Portion::Random);
                tokio::task::yield_now().await;
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Whatever interleaving happened, the pet is only ever dead when the
    // clock itself stopped on expiry.
    let mut session = std::sync::Arc::try_unwrap(session)
        .ok()
        .expect("all care tasks have finished");
    let stopped_now = session.stop_clock().unwrap();
    let pet = session.snapshot().unwrap();
    let state = session.clock_state().unwrap();
    if stopped_now {
        assert!(!pet.mood().is_terminal());
        assert_eq!(state, ClockState::Stopped(StopCause::Halted));
    } else {
        assert!(pet.mood().is_terminal());
        assert_eq!(state, ClockState::Stopped(StopCause::Expired));
    }
}
