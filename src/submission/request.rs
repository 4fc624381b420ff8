/// Field values captured at the moment the form is submitted.
///
/// Order follows the form layout so the encoded body is stable.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    fields: Vec<(String, String)>,
}

impl SubmissionRequest {
    pub fn new<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    urlencoding::encode(k),
                    urlencoding::encode(v).replace("%20", "+")
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
