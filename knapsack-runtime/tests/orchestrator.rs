use knapsack_algorithms::{
    genetic::{self, GeneticSettings},
    SolverKind,
};
use knapsack_challenges::knapsack::Instance;
use knapsack_runtime::{
    error::INTERNAL_ERROR_MESSAGE, handle, solve, validate, HttpResponse, SolveError,
};
use knapsack_structs::{
    api::{SolveRequest, SolverType},
    config::RuntimeConfig,
};
use serde_json::{json, Value};

fn scenario_a() -> Instance {
    Instance::new(vec![2, 3, 4, 5], vec![3, 4, 5, 6], 10).unwrap()
}

fn scenario_b() -> Instance {
    Instance::new(vec![10, 20, 30], vec![60, 100, 120], 50).unwrap()
}

fn error_of(response: &HttpResponse) -> &str {
    response.body["error"].as_str().unwrap()
}

fn result_keys(response: &HttpResponse) -> Vec<String> {
    response.body["results"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect()
}

#[test]
fn test_handle_solves_with_all_solvers() {
    let body = r#"{"weights":[2,3,4,5],"values":[3,4,5,6],"capacity":10,"solver_type":"all"}"#;
    let response = handle(body, &RuntimeConfig::default());

    assert_eq!(response.status, 200);
    assert!(response.is_success());
    assert_eq!(response.body["status"], "success");
    assert_eq!(result_keys(&response), vec!["dp", "greedy", "ml"]);

    let dp = &response.body["results"]["dp"];
    assert_eq!(dp["total_value"], 13);
    assert_eq!(dp["total_weight"], 10);
    assert_eq!(dp["is_feasible"], true);
    assert_eq!(dp["selection"], json!([1, 1, 0, 1]));
    assert_eq!(response.body["results"]["greedy"]["total_value"], 12);
    assert_eq!(response.body["results"]["ml"]["total_value"], 13);

    assert_eq!(
        response.body["request"],
        json!({"weights": [2, 3, 4, 5], "values": [3, 4, 5, 6], "capacity": 10})
    );
}

#[test]
fn test_handle_defaults_to_all_solvers() {
    let body = r#"{"weights":[5],"values":[10],"capacity":5}"#;
    let response = handle(body, &RuntimeConfig::default());
    assert_eq!(response.status, 200);
    assert_eq!(result_keys(&response), vec!["dp", "greedy", "ml"]);
    for solver in ["dp", "greedy", "ml"] {
        assert_eq!(response.body["results"][solver]["selected_items"], json!([0]));
    }
}

#[test]
fn test_handle_runs_only_requested_solver() {
    for (solver_type, key) in [("dp", "dp"), ("greedy", "greedy"), ("ml", "ml")] {
        let body = format!(
            r#"{{"weights":[10,20,30],"values":[60,100,120],"capacity":50,"solver_type":"{}"}}"#,
            solver_type
        );
        let response = handle(&body, &RuntimeConfig::default());
        assert_eq!(response.status, 200);
        assert_eq!(result_keys(&response), vec![key]);
    }
}

#[test]
fn test_handle_rejects_malformed_json() {
    let response = handle("{not json", &RuntimeConfig::default());
    assert_eq!(response.status, 400);
    assert!(error_of(&response).starts_with("Invalid request"));
}

#[test]
fn test_handle_rejects_non_integer_numbers() {
    for body in [
        r#"{"weights":[1.5],"values":[1],"capacity":1}"#,
        r#"{"weights":[1],"values":[-1],"capacity":1}"#,
        r#"{"weights":[1],"values":[1],"capacity":2.5}"#,
        r#"{"weights":[1],"values":[1],"capacity":1,"solver_type":"svm"}"#,
    ] {
        let response = handle(body, &RuntimeConfig::default());
        assert_eq!(response.status, 400, "{}", body);
        assert!(error_of(&response).starts_with("Invalid request"));
    }
}

#[test]
fn test_handle_reports_validation_errors() {
    let cases = [
        (
            r#"{"values":[1],"capacity":1}"#,
            "weights must be a non-empty array",
        ),
        (
            r#"{"weights":[],"values":[1],"capacity":1}"#,
            "weights must be a non-empty array",
        ),
        (
            r#"{"weights":[1],"values":[],"capacity":1}"#,
            "values must be a non-empty array",
        ),
        (
            r#"{"weights":[1,2],"values":[1],"capacity":1}"#,
            "weights (2) and values (1) must have the same length",
        ),
        (
            r#"{"weights":[1],"values":[1]}"#,
            "capacity must be provided",
        ),
    ];
    for (body, expected) in cases {
        let response = handle(body, &RuntimeConfig::default());
        assert_eq!(response.status, 400, "{}", body);
        assert_eq!(response.body, json!({ "error": expected }));
    }
}

#[test]
fn test_validate_rejects_overflowing_sums() {
    let request = SolveRequest {
        weights: Some(vec![u64::MAX, 1]),
        values: Some(vec![1, 1]),
        capacity: Some(1),
        solver_type: SolverType::Greedy,
    };
    let err = validate(&request, &RuntimeConfig::default()).unwrap_err();
    assert_eq!(err, SolveError::invalid("Sum of weights overflows u64"));
    assert_eq!(err.status_code(), 400);
}

#[test]
fn test_table_cell_limit_applies_to_exact_solvers_only() {
    let config = RuntimeConfig {
        max_table_cells: 50,
        ..RuntimeConfig::default()
    };
    let instance = scenario_a(); // 5 x 11 = 55 cells

    for solver_type in [SolverType::All, SolverType::Dp, SolverType::Ml] {
        let err = solve(&SolveRequest::new(&instance, solver_type), &config).unwrap_err();
        assert_eq!(
            err,
            SolveError::invalid(
                "Instance with 4 items and capacity 10 exceeds the limit of 50 table cells"
            )
        );
    }

    let response = solve(&SolveRequest::new(&instance, SolverType::Greedy), &config).unwrap();
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[&SolverKind::Greedy].total_value, 12);

    let at_limit = RuntimeConfig {
        max_table_cells: 55,
        ..RuntimeConfig::default()
    };
    assert!(solve(&SolveRequest::new(&instance, SolverType::Dp), &at_limit).is_ok());
}

#[test]
fn test_capacity_zero_selects_nothing() {
    let instance = Instance::new(vec![1, 2, 3], vec![10, 20, 30], 0).unwrap();
    let response = solve(
        &SolveRequest::new(&instance, SolverType::All),
        &RuntimeConfig::default(),
    )
    .unwrap();
    for solution in response.results.values() {
        assert!(solution.selected_items.is_empty());
        assert_eq!(solution.selection, vec![0, 0, 0]);
        assert_eq!(solution.total_value, 0);
        assert!(solution.is_feasible);
    }
}

#[test]
fn test_every_result_carries_solve_time() {
    let response = solve(
        &SolveRequest::new(&scenario_b(), SolverType::All),
        &RuntimeConfig::default(),
    )
    .unwrap();
    assert_eq!(response.results.len(), 3);
    for solution in response.results.values() {
        let solve_time = solution.solve_time.unwrap();
        assert!(solve_time >= 0.0);
    }
    assert_eq!(response.request, Some(scenario_b()));
}

#[test]
fn test_results_verify_against_request() {
    let instance = scenario_b();
    let response = solve(
        &SolveRequest::new(&instance, SolverType::All),
        &RuntimeConfig::default(),
    )
    .unwrap();
    for solution in response.results.values() {
        instance.verify_solution(solution).unwrap();
    }
    assert_eq!(response.results[&SolverKind::Dp].total_value, 220);
    assert_eq!(response.results[&SolverKind::Dp].total_weight, 50);
    assert_eq!(response.results[&SolverKind::Greedy].total_value, 160);
}

#[test]
fn test_reusing_exact_solution_gives_same_answers() {
    let reuse = RuntimeConfig {
        reuse_exact_solution: true,
        ..RuntimeConfig::default()
    };
    for instance in [scenario_a(), scenario_b()] {
        let request = SolveRequest::new(&instance, SolverType::All);
        let fresh = solve(&request, &RuntimeConfig::default()).unwrap();
        let reused = solve(&request, &reuse).unwrap();
        for kind in SolverKind::ALL {
            assert!(fresh.results[&kind].same_selection(&reused.results[&kind]));
        }
        assert!(reused.results[&SolverKind::Ml].solve_time.is_some());
    }
}

#[test]
fn test_response_json_has_sorted_keys() {
    let body = r#"{"weights":[5],"values":[10],"capacity":5,"solver_type":"dp"}"#;
    let response = handle(body, &RuntimeConfig::default());
    let json = response.to_json();
    assert!(json.starts_with(r#"{"request":{"capacity":5,"values":[10],"weights":[5]},"results":{"dp":{"is_feasible":true,"#));
    assert!(json.ends_with(r#""status":"success"}"#));
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, response.body);
}

#[test]
fn test_internal_error_message_is_generic() {
    let err = SolveError::Internal;
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.to_response().error, INTERNAL_ERROR_MESSAGE);
}

#[test]
fn test_genetic_runs_only_on_request() {
    let body = r#"{"weights":[10,20,30],"values":[60,100,120],"capacity":50,"solver_type":"genetic"}"#;
    let response = handle(body, &RuntimeConfig::default());
    assert_eq!(response.status, 200);
    assert_eq!(result_keys(&response), vec!["genetic"]);
    let genetic = &response.body["results"]["genetic"];
    assert_eq!(genetic["is_feasible"], true);
    assert_eq!(genetic["total_value"], 220);
    assert!(genetic["solve_time"].as_f64().unwrap() >= 0.0);
}

#[test]
fn test_genetic_uses_configured_settings() {
    let instance = scenario_a();
    let config = RuntimeConfig {
        genetic: GeneticSettings {
            population_size: 20,
            generations: 10,
            seed: 9,
            ..GeneticSettings::default()
        },
        ..RuntimeConfig::default()
    };
    let response = solve(&SolveRequest::new(&instance, SolverType::Genetic), &config).unwrap();
    let expected = genetic::solve(&instance, &config.genetic).unwrap();
    assert!(response.results[&SolverKind::Genetic].same_selection(&expected));
}

#[test]
fn test_genetic_rejects_non_positive_inputs() {
    let body = r#"{"weights":[0,2],"values":[1,1],"capacity":5,"solver_type":"genetic"}"#;
    let response = handle(body, &RuntimeConfig::default());
    assert_eq!(response.status, 400);
    assert_eq!(response.body, json!({ "error": "Weight of item 0 must be positive" }));

    // the same instance is fine for the other solvers
    let body = r#"{"weights":[0,2],"values":[1,1],"capacity":5,"solver_type":"all"}"#;
    assert_eq!(handle(body, &RuntimeConfig::default()).status, 200);

    let config = RuntimeConfig {
        genetic: GeneticSettings {
            tournament_size: 0,
            ..GeneticSettings::default()
        },
        ..RuntimeConfig::default()
    };
    let body = r#"{"weights":[1,2],"values":[1,1],"capacity":5,"solver_type":"genetic"}"#;
    assert_eq!(handle(body, &config).status, 400);
}
