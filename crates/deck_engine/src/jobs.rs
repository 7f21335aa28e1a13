use serde::{Deserialize, Deserializer};

use crate::{ApiSettings, JobPage, PageError, PostingRecord};

/// Paginated source of job postings.
#[async_trait::async_trait]
pub trait JobsFeed: Send + Sync {
    async fn fetch_page(&self, offset: u64, limit: u32) -> Result<JobPage, PageError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobsFeed {
    settings: ApiSettings,
}

impl ReqwestJobsFeed {
    pub fn new(settings: ApiSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, PageError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .build()
            .map_err(|err| PageError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl JobsFeed for ReqwestJobsFeed {
    async fn fetch_page(&self, offset: u64, limit: u32) -> Result<JobPage, PageError> {
        let client = self.build_client()?;
        let url = format!(
            "{}?offset={offset}&limit={limit}",
            self.settings.feed_url("jobs")
        );

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|err| PageError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PageError::Status(status.as_u16()));
        }

        let body: PageBody = response
            .json()
            .await
            .map_err(|err| PageError::Malformed(err.to_string()))?;

        Ok(JobPage {
            items: body.items.into_iter().map(PostingBody::into_record).collect(),
            // Feeds that omit the cursor leave it where it was.
            next_offset: body.next_offset.unwrap_or(offset),
        })
    }
}

#[derive(Debug, Deserialize)]
struct PageBody {
    #[serde(default)]
    items: Vec<PostingBody>,
    #[serde(rename = "nextOffset")]
    next_offset: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct PostingBody {
    #[serde(deserialize_with = "id_as_string", default)]
    id: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

impl PostingBody {
    fn into_record(self) -> PostingRecord {
        PostingRecord {
            id: self.id,
            company: self.company,
            title: self.title,
            description: self.description,
        }
    }
}

/// The feed serves ids as strings or bare numbers depending on the posting
/// source; both become strings here.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "unsupported id value: {other}"
        ))),
    }
}
