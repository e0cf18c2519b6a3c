//! Integration tests for the cat and dog fetch flows
//!
//! Run with: cargo test --test fetch_flows

mod common;

use common::{cat, dog, GatedRepository};
use pawfetch::{
    ApiError, FlowSettings, HttpPetRepository, Phase, PetViewModel, ResolutionPolicy,
};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(resolution_policy: ResolutionPolicy) -> FlowSettings {
    FlowSettings {
        resolution_policy,
        ..FlowSettings::default()
    }
}

#[tokio::test]
async fn overlapping_cat_requests_keep_most_recently_issued_response() {
    let repo = GatedRepository::new();
    let first = repo.gate_cat();
    let second = repo.gate_cat();
    let vm = PetViewModel::with_settings(repo.clone(), settings(ResolutionPolicy::LatestIssued));

    let first_handle = vm.request_cat();
    repo.wait_for_cat_calls(1).await;
    let second_handle = vm.request_cat();
    repo.wait_for_cat_calls(2).await;

    // The second request resolves first, then the first one arrives late
    second.send(Ok(cat("second"))).unwrap();
    second_handle.await.unwrap();
    assert_eq!(vm.cat_state().data().map(|c| c.id.as_str()), Some("second"));

    first.send(Ok(cat("first"))).unwrap();
    first_handle.await.unwrap();

    let state = vm.cat_state();
    assert_eq!(state.phase(), Phase::Success);
    assert_eq!(state.data().map(|c| c.id.as_str()), Some("second"));
}

#[tokio::test]
async fn overlapping_cat_requests_stay_loading_until_latest_resolves() {
    let repo = GatedRepository::new();
    let first = repo.gate_cat();
    let second = repo.gate_cat();
    let vm = PetViewModel::with_settings(repo.clone(), settings(ResolutionPolicy::LatestIssued));

    let first_handle = vm.request_cat();
    repo.wait_for_cat_calls(1).await;
    let second_handle = vm.request_cat();
    repo.wait_for_cat_calls(2).await;

    first.send(Err(ApiError::Http { status: 500 })).unwrap();
    first_handle.await.unwrap();
    assert!(vm.cat_state().is_loading());

    second.send(Ok(cat("second"))).unwrap();
    second_handle.await.unwrap();
    assert_eq!(vm.cat_state().phase(), Phase::Success);
}

#[tokio::test]
async fn overlapping_cat_requests_under_last_write_wins_keep_later_resolving_response() {
    let repo = GatedRepository::new();
    let first = repo.gate_cat();
    let second = repo.gate_cat();
    let vm = PetViewModel::with_settings(repo.clone(), settings(ResolutionPolicy::LastWriteWins));

    let first_handle = vm.request_cat();
    repo.wait_for_cat_calls(1).await;
    let second_handle = vm.request_cat();
    repo.wait_for_cat_calls(2).await;

    second.send(Ok(cat("second"))).unwrap();
    second_handle.await.unwrap();
    first.send(Ok(cat("first"))).unwrap();
    first_handle.await.unwrap();

    let state = vm.cat_state();
    assert_eq!(state.phase(), Phase::Success);
    assert_eq!(state.data().map(|c| c.id.as_str()), Some("first"));
}

#[tokio::test]
async fn starting_cat_clears_dog_result_but_not_in_flight_dog() {
    let repo = GatedRepository::new();
    let dog_gate = repo.gate_dog();
    let cat_gate = repo.gate_cat();
    let vm = PetViewModel::new(repo.clone());

    let dog_handle = vm.request_dog();
    repo.wait_for_dog_calls(1).await;
    let cat_handle = vm.request_cat();

    // Dog is still in flight, so it keeps loading
    assert!(vm.dog_state().is_loading());

    dog_gate.send(Ok(dog("husky"))).unwrap();
    dog_handle.await.unwrap();
    cat_gate.send(Ok(cat("abc"))).unwrap();
    cat_handle.await.unwrap();

    assert_eq!(vm.dog_state().phase(), Phase::Success);
    assert_eq!(vm.cat_state().phase(), Phase::Success);
}

#[tokio::test]
async fn successful_cat_leaves_dog_flow_cleared() {
    let repo = GatedRepository::new();
    let dog_gate = repo.gate_dog();
    let cat_gate = repo.gate_cat();
    let vm = PetViewModel::new(repo.clone());

    dog_gate.send(Err(ApiError::Http { status: 503 })).unwrap();
    vm.request_dog().await.unwrap();
    assert_eq!(vm.dog_state().phase(), Phase::Failure);

    cat_gate.send(Ok(cat("abc"))).unwrap();
    vm.request_cat().await.unwrap();

    let cat_state = vm.cat_state();
    assert_eq!(cat_state.phase(), Phase::Success);
    assert_eq!(cat_state.data().map(|c| c.id.as_str()), Some("abc"));
    assert!(cat_state.error().is_none());

    let dog_state = vm.dog_state();
    assert!(dog_state.data().is_none());
    assert!(dog_state.error().is_none());
}

#[tokio::test]
async fn independent_flows_do_not_clear_each_other() {
    let repo = GatedRepository::new();
    let dog_gate = repo.gate_dog();
    let cat_gate = repo.gate_cat();
    let settings = FlowSettings {
        exclusive_flows: false,
        ..FlowSettings::default()
    };
    let vm = PetViewModel::with_settings(repo.clone(), settings);

    dog_gate.send(Ok(dog("pug"))).unwrap();
    vm.request_dog().await.unwrap();
    cat_gate.send(Ok(cat("abc"))).unwrap();
    vm.request_cat().await.unwrap();

    assert_eq!(vm.dog_state().phase(), Phase::Success);
    assert_eq!(vm.cat_state().phase(), Phase::Success);
}

#[tokio::test]
async fn flow_recovers_after_failure() {
    let repo = GatedRepository::new();
    let failing = repo.gate_cat();
    let succeeding = repo.gate_cat();
    let vm = PetViewModel::new(repo.clone());

    failing.send(Err(ApiError::EmptyResult)).unwrap();
    vm.request_cat().await.unwrap();
    assert_eq!(vm.cat_state().phase(), Phase::Failure);

    succeeding.send(Ok(cat("again"))).unwrap();
    vm.request_cat().await.unwrap();
    assert_eq!(vm.cat_state().phase(), Phase::Success);
    assert!(vm.cat_state().error().is_none());
}

#[tokio::test]
async fn malformed_bodies_fail_both_flows_with_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/images/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"id\":"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/breeds/image/random"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let repository = HttpPetRepository::from_endpoints(
        &server.uri(),
        &format!("{}/api/", server.uri()),
        &Default::default(),
    )
    .unwrap();
    let vm = PetViewModel::new(Arc::new(repository));

    vm.request_cat().await.unwrap();
    let cat_state = vm.cat_state();
    assert_eq!(cat_state.phase(), Phase::Failure);
    assert!(cat_state.error().unwrap().starts_with("DecodeError: "));

    vm.request_dog().await.unwrap();
    let dog_state = vm.dog_state();
    assert_eq!(dog_state.phase(), Phase::Failure);
    assert!(dog_state.error().unwrap().starts_with("DecodeError: "));
    assert!(dog_state.data().is_none());
}

#[tokio::test]
async fn empty_search_fails_cat_flow_with_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/images/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let repository =
        HttpPetRepository::from_endpoints(&server.uri(), &server.uri(), &Default::default())
            .unwrap();
    let vm = PetViewModel::new(Arc::new(repository));

    vm.request_cat().await.unwrap();

    let state = vm.cat_state();
    assert_eq!(state.phase(), Phase::Failure);
    assert!(state.data().is_none());
    assert!(state.error().unwrap().starts_with("EmptyResult"));
}
