use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use crate::db::enums::{CycleStatus, RecordStatus};
use crate::db::models::{Cycle, Dimension, Expense, GoalEvaluation, Record};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionScore {
    pub dimension_id: Uuid,
    pub name: String,
    pub color_code: String,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub cycle_id: Uuid,
    pub dimensions: Vec<DimensionScore>,
    pub overall: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub cycle_id: Uuid,
    pub cycle_number: i32,
    pub label: String,
    pub dimensions: Vec<(Uuid, i32)>,
    pub average: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseSummary {
    pub total: f64,
    pub by_category: BTreeMap<String, f64>,
}

fn round(value: f64) -> i32 {
    value.round() as i32
}

/// Mean final score of the evaluations filed under one dimension in one cycle.
pub fn dimension_mean(evaluations: &[GoalEvaluation], cycle_id: Uuid, dimension_id: Uuid) -> f64 {
    let scores: Vec<f64> = evaluations
        .iter()
        .filter(|e| e.cycle_id == cycle_id && e.dimension_id == dimension_id)
        .map(|e| e.final_score)
        .collect();
    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

pub fn cycle_scorecard(
    cycle_id: Uuid,
    dimensions: &[Dimension],
    evaluations: &[GoalEvaluation],
) -> Scorecard {
    let scores: Vec<DimensionScore> = dimensions
        .iter()
        .map(|dim| DimensionScore {
            dimension_id: dim.id,
            name: dim.name.clone(),
            color_code: dim.color_code.clone(),
            score: round(dimension_mean(evaluations, cycle_id, dim.id)),
        })
        .collect();
    let overall = if scores.is_empty() {
        0
    } else {
        round(scores.iter().map(|s| f64::from(s.score)).sum::<f64>() / scores.len() as f64)
    };
    Scorecard {
        cycle_id,
        dimensions: scores,
        overall,
    }
}

/// One point per completed cycle. Dimensions without evaluations show 0 and
/// are left out of the average.
pub fn completed_trend(
    cycles: &[Cycle],
    dimensions: &[Dimension],
    evaluations: &[GoalEvaluation],
) -> Vec<TrendPoint> {
    if dimensions.is_empty() {
        return Vec::new();
    }
    cycles
        .iter()
        .filter(|c| c.status == CycleStatus::Completed)
        .map(|cycle| {
            let means: Vec<(Uuid, f64)> = dimensions
                .iter()
                .map(|dim| (dim.id, dimension_mean(evaluations, cycle.id, dim.id)))
                .collect();
            let scored: Vec<f64> = means.iter().map(|(_, m)| *m).filter(|m| *m > 0.0).collect();
            let average = if scored.is_empty() {
                0
            } else {
                round(scored.iter().sum::<f64>() / scored.len() as f64)
            };
            TrendPoint {
                cycle_id: cycle.id,
                cycle_number: cycle.cycle_number,
                label: format!("P{}", cycle.cycle_number),
                dimensions: means.into_iter().map(|(id, m)| (id, round(m))).collect(),
                average,
            }
        })
        .collect()
}

pub fn summarize_expenses(expenses: &[Expense]) -> ExpenseSummary {
    let mut by_category: BTreeMap<String, f64> = BTreeMap::new();
    for expense in expenses {
        *by_category.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }
    ExpenseSummary {
        total: expenses.iter().map(|e| e.amount).sum(),
        by_category,
    }
}

/// Lifetime totals for one user.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GlobalStats {
    pub total_cycles_completed: i64,
    pub total_records: i64,
    pub total_expense: f64,
    /// Mean rate of completed cycles, 0 when none have completed.
    pub avg_completion_rate: i32,
    pub records_by_dimension: BTreeMap<Uuid, i64>,
}

/// Only published records count.
pub fn global_stats(cycles: &[Cycle], records: &[Record], expenses: &[Expense]) -> GlobalStats {
    let completed: Vec<&Cycle> = cycles
        .iter()
        .filter(|c| c.status == CycleStatus::Completed)
        .collect();
    let avg_completion_rate = if completed.is_empty() {
        0
    } else {
        round(completed.iter().map(|c| c.completion_rate as f64).sum::<f64>() / completed.len() as f64)
    };

    let mut records_by_dimension: BTreeMap<Uuid, i64> = BTreeMap::new();
    let mut total_records = 0;
    for record in records.iter().filter(|r| r.status == RecordStatus::Published) {
        total_records += 1;
        *records_by_dimension.entry(record.dimension_id).or_insert(0) += 1;
    }

    GlobalStats {
        total_cycles_completed: completed.len() as i64,
        total_records,
        total_expense: expenses.iter().map(|e| e.amount).sum(),
        avg_completion_rate,
        records_by_dimension,
    }
}
