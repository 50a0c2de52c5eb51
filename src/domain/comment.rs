// Comment domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: i64,
    pub id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[cfg(test)]
impl Comment {
    pub fn new(post_id: i64, id: i64, name: &str, email: &str, body: &str) -> Self {
        Self {
            post_id,
            id,
            name: name.to_string(),
            email: email.to_string(),
            body: body.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_payload() {
        let raw = r#"[{
            "postId": 1,
            "id": 1,
            "name": "id labore ex et quam laborum",
            "email": "Eliseo@gardner.biz",
            "body": "laudantium enim quasi est"
        }]"#;

        let comments: Vec<Comment> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            comments,
            vec![Comment::new(
                1,
                1,
                "id labore ex et quam laborum",
                "Eliseo@gardner.biz",
                "laudantium enim quasi est"
            )]
        );
    }
}
