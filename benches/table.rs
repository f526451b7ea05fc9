use criterion::{black_box, criterion_group, criterion_main, Criterion};
use peopledb::{
    consts::consts::EntityId,
    database::table::{row::UpdatePersonData, table::PersonTable},
    model::{action::Action, person::Person},
};
use serde_json::json;

fn filled_table(size: u64) -> PersonTable {
    PersonTable::from_people(
        (0..size)
            .map(|i| Person::new(&i.to_string(), &format!("Person {}", i), i, "female"))
            .collect(),
    )
}

fn table_benchmark(c: &mut Criterion) {
    c.bench_function("add 1,000 people", |b| {
        b.iter(|| {
            let mut table = PersonTable::new();

            for i in 0..1_000u64 {
                let _ = table.apply(Action::Add(Person::new(&i.to_string(), "Sam", i, "male")));
            }
        })
    });

    let table = filled_table(10_000);

    c.bench_function("find last by name in 10,000 people", |b| {
        b.iter(|| table.find_by_name(black_box("Person 9999")))
    });

    let update: UpdatePersonData =
        serde_json::from_value(json!({ "age": 21 })).expect("valid update");

    c.bench_function("update last in 10,000 people", |b| {
        let mut table = filled_table(10_000);

        b.iter(|| {
            table.apply(Action::Update(
                black_box(EntityId::from("9999")),
                update.clone(),
            ))
        })
    });
}

criterion_group!(benches, table_benchmark);
criterion_main!(benches);
