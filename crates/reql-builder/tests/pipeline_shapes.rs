//! End-to-end wire shapes for representative pipelines, checked against
//! the frames the official drivers produce.

use reql_builder::prelude::*;
use serde_json::json;

#[test]
fn update_pipeline_with_row_predicate() {
    let query = r
        .db("blog")
        .table("posts")
        .filter(r.row().bracket("draft"))
        .update(Datum::from(json!({"draft": false})))
        .opt_arg("non_atomic", true);

    assert_eq!(
        query.encode().unwrap(),
        json!([53,
               [[39,
                 [[15, [[14, ["blog"]], "posts"]],
                  [170, [[13, []], "draft"]]]],
                {"draft": false}],
               {"non_atomic": true}])
    );
}

#[test]
fn paging_pipeline() {
    let query = r
        .table("posts")
        .order_by(r.desc("created_at"))
        .skip(20)
        .limit(10)
        .pluck(["id", "title"]);

    assert_eq!(
        query.encode().unwrap(),
        json!([33,
               [[71, [[70, [[41, [[15, ["posts"]], [74, ["created_at"]]]], 20]], 10]],
                "id", "title"]])
    );
}

#[test]
fn literal_collections_nest_inside_write_documents() {
    let query = r.table("posts").insert(Datum::from(json!({
        "title": "hello",
        "tags": ["a", "b"],
        "meta": {"views": 0}
    })));

    assert_eq!(
        query.encode().unwrap(),
        json!([56, [[15, ["posts"]],
                    {"meta": {"views": 0},
                     "tags": [2, ["a", "b"]],
                     "title": "hello"}]])
    );
}

#[test]
fn grouped_aggregation() {
    let query = r.table("games").group("player").max().ungroup();

    assert_eq!(
        query.encode().unwrap(),
        json!([150, [[148, [[144, [[15, ["games"]], "player"]]]]]])
    );
}
