use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html("<h1>Bakery GET-POST-PATCH-DELETE API</h1>")
}
