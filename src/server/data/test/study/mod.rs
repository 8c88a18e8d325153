use crate::server::{
    data::study::StudyRepository,
    model::study::{Level, Study, Value},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod exists;
mod find_all;
mod find_by_id;
mod upsert;

/// Builds a study document for upsert tests.
fn study_doc(id: &str, name: &str, levels: Vec<Level>) -> Study {
    Study {
        id: id.to_string(),
        name: name.to_string(),
        description: "Test study description".to_string(),
        created_by: String::new(),
        levels,
    }
}

fn level(order: i32, name: &str, values: Vec<Value>) -> Level {
    Level {
        order,
        name: name.to_string(),
        created_by: String::new(),
        values,
    }
}

fn value(order: i32, name: &str) -> Value {
    Value {
        order,
        name: name.to_string(),
        created_by: String::new(),
    }
}
