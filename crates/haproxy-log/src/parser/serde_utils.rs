use http::Uri;
use serde::Serializer;

pub fn serialize_uri<S>(uri: &Option<Uri>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match uri {
        Some(uri) => serializer.collect_str(uri),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    // Helper: serialize a uri via serde_json
    fn serialize(uri: Option<Uri>) -> String {
        #[derive(Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "serialize_uri")]
            uri: Option<Uri>,
        }

        serde_json::to_string(&Wrapper { uri }).unwrap()
    }

    #[test]
    fn test_serialize_relative_uri() {
        let json = serialize(Some("/path/to/app?x=1".parse().unwrap()));
        assert_eq!(json, r#"{"uri":"/path/to/app?x=1"}"#);
    }

    #[test]
    fn test_serialize_absolute_uri() {
        let json = serialize(Some("http://example.com/".parse().unwrap()));
        assert_eq!(json, r#"{"uri":"http://example.com/"}"#);
    }

    #[test]
    fn test_serialize_missing_uri() {
        assert_eq!(serialize(None), r#"{"uri":null}"#);
    }
}
