//! JSON records shaped like the public JSONPlaceholder data set
//!
//! Ids are emitted as JSON numbers, as the real API does.

use serde_json::{json, Value};

pub fn comment(id: u32, post_id: u32) -> Value {
    json!({
        "postId": post_id,
        "id": id,
        "name": format!("comment {}", id),
        "email": format!("reader{}@example.com", id),
        "body": "laudantium enim quasi est quidem magnam voluptate ipsam eos"
    })
}

pub fn post(id: u32, user_id: u32) -> Value {
    json!({
        "userId": user_id,
        "id": id,
        "title": format!("post {}", id),
        "body": "quia et suscipit suscipit recusandae consequuntur expedita"
    })
}

pub fn photo(id: u32, album_id: u32) -> Value {
    json!({
        "albumId": album_id,
        "id": id,
        "title": format!("photo {}", id),
        "url": format!("https://via.placeholder.com/600/{}", id),
        "thumbnailUrl": format!("https://via.placeholder.com/150/{}", id)
    })
}

pub fn todo(id: u32, user_id: u32, completed: bool) -> Value {
    json!({
        "userId": user_id,
        "id": id,
        "title": format!("todo {}", id),
        "completed": completed
    })
}

pub fn album(id: u32, user_id: u32) -> Value {
    json!({
        "userId": user_id,
        "id": id,
        "title": format!("album {}", id)
    })
}

pub fn user(id: u32) -> Value {
    json!({
        "id": id,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}
