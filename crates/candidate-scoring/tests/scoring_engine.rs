//! End-to-end scoring scenarios exercised through the public engine facade.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use candidate_scoring::scoring::export::{export_to_string, read_export};
use candidate_scoring::scoring::ranking::rank;
use candidate_scoring::scoring::{
    score, ApplicantRecord, ApplicantSubmission, CompensationExpectation, EducationRecord,
    EmploymentPeriod, Heuristics, KeywordCriterion, PatternCriterion, Rating, ScoreBreakdown,
    ScoringConfiguration, ScoringEngine, TenureBand,
};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

fn sales_rubric() -> ScoringConfiguration {
    let mut config = ScoringConfiguration::default();
    config.experience.required_band = TenureBand::OneToThree;
    config.skills.required = ["CRM", "B2B", "холодные звонки", "1С"]
        .into_iter()
        .map(String::from)
        .collect();
    config.skills.bonus = Vec::new();
    config
}

fn seasoned_rep() -> ApplicantRecord {
    ApplicantRecord {
        employment_history: vec![EmploymentPeriod::new(
            "2022-03-01",
            Some("2024-03-01"),
            "Альфа-Банк",
            "Менеджер по работе с клиентами",
        )
        .with_description("Сопровождение корпоративных клиентов")],
        skills: vec!["CRM".to_string(), "B2B".to_string()],
        compensation: Some(CompensationExpectation::exact(90_000.0)),
        education: vec![EducationRecord::new(
            "Экономика",
            Some("Финансовый университет"),
        )],
        summary: Some("Рост портфеля на 25% за год".to_string()),
    }
}

#[test]
fn empty_record_lands_at_twenty_eight() {
    let result = score(&ApplicantRecord::default(), &sales_rubric(), today());

    assert_eq!(
        result.breakdown,
        ScoreBreakdown {
            experience: 5,
            skills: 0,
            compensation: 8,
            education: 5,
            availability: 10,
            bonus: 0,
        }
    );
    assert_eq!(result.total, 28);
    assert_eq!(result.rating, Rating::VeryLowMatch);
    assert_eq!(result.stars, 1);
}

#[test]
fn well_matched_rep_scores_eighty_three() {
    let result = score(&seasoned_rep(), &sales_rubric(), today());

    assert_eq!(
        result.breakdown,
        ScoreBreakdown {
            experience: 30,
            skills: 8,
            compensation: 15,
            education: 10,
            availability: 10,
            bonus: 10,
        }
    );
    assert_eq!(result.total, 83);
    assert_eq!(result.rating, Rating::Good);
    assert_eq!(result.stars, 4);
}

#[test]
fn sparse_job_board_payload_is_still_scored() {
    let record: ApplicantRecord = serde_json::from_value(serde_json::json!({
        "experience": [{
            "start": null,
            "end": null,
            "company": null,
            "position": "Менеджер B2B"
        }],
        "skill_set": null,
        "salary": null,
        "education": { "primary": [{ "name": "Экономика", "organization": null }] }
    }))
    .expect("sparse payload parses");

    let result = score(&record, &sales_rubric(), today());

    assert_eq!(
        result.breakdown,
        ScoreBreakdown {
            experience: 15,
            skills: 4,
            compensation: 8,
            education: 10,
            availability: 10,
            bonus: 0,
        }
    );
    assert_eq!(result.total, 47);
    assert_eq!(result.rating, Rating::VeryLowMatch);
}

#[test]
fn scoring_is_idempotent_for_fixed_inputs() {
    let engine = ScoringEngine::new(sales_rubric());
    let mut record = seasoned_rep();
    record.employment_history[0].end = None;

    let first = engine.score(&record, today());
    let second = engine.score(&record, today());
    assert_eq!(first, second);
}

#[test]
fn evaluation_date_drives_ongoing_tenure() {
    let engine = ScoringEngine::new(sales_rubric());
    let record = ApplicantRecord {
        employment_history: vec![EmploymentPeriod::new("2024-01-01", None, "Acme", "Rep")],
        ..ApplicantRecord::default()
    };

    let early = engine.score(&record, NaiveDate::from_ymd_opt(2024, 6, 1).expect("date"));
    let later = engine.score(&record, NaiveDate::from_ymd_opt(2026, 6, 1).expect("date"));

    assert_eq!(early.breakdown.experience, 15);
    assert_eq!(later.breakdown.experience, 30);
}

#[test]
fn duplicate_required_keywords_inflate_matches() {
    let mut config = sales_rubric();
    config.skills.required = vec!["crm".to_string(), "CRM".to_string(), "crm".to_string()];
    let record = ApplicantRecord {
        skills: vec!["CRM".to_string()],
        ..ApplicantRecord::default()
    };

    assert_eq!(score(&record, &config, today()).breakdown.skills, 12);
}

#[test]
fn sub_scores_stay_within_caps_across_varied_records() {
    let config = ScoringConfiguration::default();
    let bands = [
        TenureBand::LessThanOneYear,
        TenureBand::OneToThree,
        TenureBand::ThreeToSix,
        TenureBand::MoreThanSix,
        TenureBand::Unspecified,
    ];
    let histories = [
        Vec::new(),
        vec![EmploymentPeriod::new("garbage", None, "", "")],
        vec![EmploymentPeriod::new("2024-12-01", None, "Ozon", "Продажи B2B")],
        vec![
            EmploymentPeriod::new("2005-01-01", Some("2015-01-01"), "Сбер", "CRM")
                .with_description("переговоры, партнерство, реферральные, активные продажи"),
            EmploymentPeriod::new("2015-02-01", None, "ВТБ", "B2B продажи"),
        ],
    ];
    let expectations = [
        None,
        Some(CompensationExpectation::exact(10_000.0)),
        Some(CompensationExpectation::range(Some(140_000.0), Some(200_000.0))),
        Some(CompensationExpectation::exact(1_000_000.0)),
    ];

    for band in bands {
        let mut config = config.clone();
        config.experience.required_band = band;
        let engine = ScoringEngine::new(config);

        for history in &histories {
            for expectation in &expectations {
                let record = ApplicantRecord {
                    employment_history: history.clone(),
                    compensation: *expectation,
                    summary: Some("план выполнен на 120%".to_string()),
                    ..ApplicantRecord::default()
                };
                let result = engine.score(&record, today());
                let b = result.breakdown;

                assert!((5..=30).contains(&b.experience));
                assert!(b.skills <= 25);
                assert!((8..=15).contains(&b.compensation));
                assert!((5..=10).contains(&b.education));
                assert_eq!(b.availability, 10);
                assert!([0, 5, 10].contains(&b.bonus));
                assert!(result.total <= 100);
                assert_eq!(u16::from(result.total), b.sum().min(100));
                assert_eq!(result.rating, Rating::from_total(result.total));
                assert_eq!(result.stars, result.rating.stars());
            }
        }
    }
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = Arc::new(ScoringEngine::new(sales_rubric()));
    let expected = engine.score(&seasoned_rep(), today());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.score(&seasoned_rep(), today()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("scoring thread"), expected);
    }
}

#[test]
fn locale_heuristics_can_be_replaced() {
    let heuristics = Heuristics {
        relevant_education: Arc::new(KeywordCriterion::new(["business", "economics"])),
        notable_employer: Arc::new(KeywordCriterion::new(["stripe", "shopify"])),
        quantified_achievement: Arc::new(
            PatternCriterion::new(r"\d+%|increased|exceeded").expect("pattern compiles"),
        ),
    };
    let engine = ScoringEngine::new(sales_rubric()).with_heuristics(heuristics);
    let record = ApplicantRecord {
        employment_history: vec![EmploymentPeriod::new(
            "2022-01-01",
            Some("2024-01-01"),
            "Stripe",
            "Account Executive",
        )
        .with_description("Exceeded quota four quarters running")],
        education: vec![EducationRecord::new("BA Economics", None)],
        ..ApplicantRecord::default()
    };

    let result = engine.score(&record, today());

    assert_eq!(result.breakdown.education, 10);
    assert_eq!(result.breakdown.bonus, 10);
}

#[test]
fn ranked_export_round_trips_breakdowns() {
    let engine = ScoringEngine::new(sales_rubric());
    let submissions = vec![
        ApplicantSubmission {
            id: "sparse".to_string(),
            applicant: ApplicantRecord::default(),
        },
        ApplicantSubmission {
            id: "seasoned".to_string(),
            applicant: seasoned_rep(),
        },
    ];

    let ranking = rank(&engine, &submissions, today());
    let csv = export_to_string(&ranking).expect("export renders");
    let rows = read_export(csv.as_bytes()).expect("export parses");

    assert_eq!(rows[0].id, "seasoned");
    assert_eq!(rows[0].total, 83);
    for (row, entry) in rows.iter().zip(&ranking) {
        assert_eq!(row.score_result().expect("consistent row"), entry.result);
    }
}

#[test]
fn demo_fixtures_load_and_rank() {
    let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
    let rubric =
        ScoringConfiguration::from_path(demos.join("rubric.json")).expect("demo rubric loads");
    let pool: Vec<ApplicantSubmission> =
        serde_json::from_reader(File::open(demos.join("pool.json")).expect("demo pool opens"))
            .expect("demo pool parses");

    assert_eq!(rubric.experience.required_band, TenureBand::ThreeToSix);

    let ranking = rank(&ScoringEngine::new(rubric), &pool, today());
    let ids: Vec<&str> = ranking.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, vec!["hh-48213", "hh-50977", "hh-51002"]);
    assert_eq!(ranking[2].result.total, 28);
}
