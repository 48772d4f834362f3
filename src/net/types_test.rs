use super::*;

#[test]
fn order_id_accepts_integer() {
    let order: Order = serde_json::from_str(r#"{"id": 7, "order_details": "two pizzas"}"#)
        .expect("order with integer id");
    assert_eq!(order.id, "7");
    assert_eq!(order.order_details, "two pizzas");
}

#[test]
fn order_id_accepts_string() {
    let order: Order = serde_json::from_str(r#"{"id": "a1", "order_details": "salad"}"#)
        .expect("order with string id");
    assert_eq!(order.id, "a1");
}

#[test]
fn image_accepts_image_url_alias() {
    let image: Image = serde_json::from_str(
        r#"{"id": 3, "title": "cat", "image_url": "https://cdn.example/cat.png"}"#,
    )
    .expect("image with aliased url field");
    assert_eq!(image.url, "https://cdn.example/cat.png");
    assert_eq!(image.created_at, "");
    assert_eq!(image.storage_id, "");
}

#[test]
fn image_reads_full_record() {
    let image: Image = serde_json::from_str(
        r#"{
            "id": "img-9",
            "title": "sunset",
            "url": "https://cdn.example/sunset.jpg",
            "created_at": "2026-08-01T12:00:00Z",
            "storage_id": "s3-abc"
        }"#,
    )
    .expect("full image record");
    assert_eq!(image.id, "img-9");
    assert_eq!(image.created_at, "2026-08-01T12:00:00Z");
    assert_eq!(image.storage_id, "s3-abc");
}
