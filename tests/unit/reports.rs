use tenday_backend::db::enums::{GoalType, RecordStatus};
use tenday_backend::services::evaluations_service::EvaluateGoalRequest;
use tenday_backend::services::expenses_service::{ExpenseItem, SaveExpensesRequest};
use tenday_backend::services::records_service::SaveRecordRequest;
use tenday_backend::services::{
    CyclesService, EvaluationsService, ExpensesService, RecordsService, ReportsService,
    RequestContext,
};
use uuid::Uuid;

use super::goals::cycle_goal;
use super::{d, journal};

#[test]
fn scorecard_and_trend_follow_final_scores() {
    let j = journal(d(2026, 1, 5));
    for (dim, ai, user) in [(0, 80.0, None), (0, 90.0, Some(70.0)), (1, 55.0, None)] {
        let goal = cycle_goal(&j, 0, dim, "weekly target");
        EvaluationsService::evaluate(
            &j.store,
            &j.ctx,
            &EvaluateGoalRequest {
                goal_id: goal.id,
                goal_type: GoalType::Cycle,
                ai_score: ai,
                ai_analysis: "assessed".to_string(),
                user_score: user,
                user_comment: None,
            },
        )
        .unwrap();
    }

    let card = ReportsService::cycle_scorecard(&j.store, &j.ctx, j.cycles[0].id).unwrap();
    assert_eq!(card.dimensions.len(), 6);
    assert_eq!(card.dimensions[0].score, 80);
    assert_eq!(card.dimensions[1].score, 55);
    // (80 + 55) / 6
    assert_eq!(card.overall, 23);

    // nothing is completed yet
    assert!(ReportsService::trend(&j.store, &j.ctx).unwrap().is_empty());

    CyclesService::refresh_statuses(&j.store, Some(j.ctx.user_id), d(2026, 1, 11)).unwrap();
    let trend = ReportsService::trend(&j.store, &j.ctx).unwrap();
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].label, "P1");
    // mean of the two scored dimensions only
    assert_eq!(trend[0].average, 68);
}

#[test]
fn global_stats_add_up_completed_cycles_records_and_spending() {
    let j = journal(d(2026, 1, 5));
    let save = |dimension_id: Uuid, day: u32, status: RecordStatus| {
        RecordsService::save(
            &j.store,
            &j.ctx,
            &SaveRecordRequest {
                cycle_id: j.cycles[0].id,
                dimension_id,
                record_date: d(2026, 1, day),
                content: "kept at it".to_string(),
                status,
            },
            j.today,
        )
        .unwrap();
    };
    for dim in &j.dimensions {
        save(dim.id, 1, RecordStatus::Published);
    }
    save(j.dimensions[0].id, 2, RecordStatus::Draft);

    ExpensesService::save_batch(
        &j.store,
        &j.ctx,
        &SaveExpensesRequest {
            cycle_id: j.cycles[0].id,
            record_id: None,
            items: vec![
                ExpenseItem {
                    category: "food".to_string(),
                    item_name: "lunch".to_string(),
                    amount: 12.5,
                    expense_date: d(2026, 1, 2),
                },
                ExpenseItem {
                    category: "books".to_string(),
                    item_name: "novel".to_string(),
                    amount: 30.0,
                    expense_date: d(2026, 1, 3),
                },
            ],
        },
    )
    .unwrap();

    let before = ReportsService::global_stats(&j.store, &j.ctx).unwrap();
    assert_eq!(before.total_cycles_completed, 0);
    assert_eq!(before.avg_completion_rate, 0);
    assert_eq!(before.total_records, 6);

    CyclesService::refresh_statuses(&j.store, Some(j.ctx.user_id), d(2026, 1, 11)).unwrap();
    let stats = ReportsService::global_stats(&j.store, &j.ctx).unwrap();
    assert_eq!(stats.total_cycles_completed, 1);
    // 6 of 60 slots
    assert_eq!(stats.avg_completion_rate, 10);
    assert_eq!(stats.total_records, 6);
    assert_eq!(stats.total_expense, 42.5);
    assert!(j.dimensions.iter().all(|dim| stats.records_by_dimension[&dim.id] == 1));
}

#[test]
fn global_stats_for_a_user_without_a_horizon_are_zero() {
    let j = journal(d(2026, 1, 5));
    let stranger = RequestContext::for_user(Uuid::new_v4());
    let stats = ReportsService::global_stats(&j.store, &stranger).unwrap();
    assert_eq!(stats.total_cycles_completed, 0);
    assert_eq!(stats.total_records, 0);
    assert_eq!(stats.total_expense, 0.0);
}
