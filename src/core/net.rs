use reqwest::header::ACCEPT;
use url::Url;

use crate::core::{IexClient, IexError, OutputFormat, Payload, RequestSpec};

impl IexClient {
    /// Sends one GET for `spec` and decodes the body according to the effective format.
    ///
    /// There is no retry: a failed call is reported once and left to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::Http`] for a non-success status, [`IexError::Request`]
    /// for transport failures and [`IexError::Data`] for an undecodable JSON body.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, spec), err, fields(path = %spec.path()))
    )]
    pub async fn execute(&self, spec: &RequestSpec) -> Result<Payload, IexError> {
        let format = spec.format().unwrap_or(self.config().format());
        let url = self.request_url(spec, format)?;

        let resp = self
            .http()
            .get(url.clone())
            .header(ACCEPT, accept_for(format))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(IexError::Http {
                status: status.as_u16(),
                body,
                url: redact_token(&url),
            });
        }

        match format {
            OutputFormat::Json => {
                let text = resp.text().await?;
                let value = serde_json::from_str(&text)
                    .map_err(|e| IexError::Data(format!("json parse error: {e}")))?;
                Ok(Payload::Json(value))
            }
            OutputFormat::Csv => Ok(Payload::Text(resp.text().await?)),
            OutputFormat::Binary => Ok(Payload::Binary(resp.bytes().await?.to_vec())),
        }
    }

    /// `{prefix}{path}?{query}&token=..[&filter=..][&format=..]`
    pub(crate) fn request_url(
        &self,
        spec: &RequestSpec,
        format: OutputFormat,
    ) -> Result<Url, IexError> {
        let mut url = self.rest_prefix()?.join(spec.path())?;
        {
            let mut qp = url.query_pairs_mut();
            for (k, v) in spec.query().pairs() {
                qp.append_pair(k, v);
            }
            qp.append_pair("token", self.config().token());
            if let Some(filter) = spec.filter() {
                qp.append_pair("filter", filter);
            }
            if format != OutputFormat::Json {
                qp.append_pair("format", format.as_str());
            }
        }
        Ok(url)
    }
}

fn accept_for(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json => "application/json",
        OutputFormat::Csv => "text/csv",
        OutputFormat::Binary => "application/octet-stream",
    }
}

/// Strips the token so URLs can be logged and put into errors.
pub(crate) fn redact_token(url: &Url) -> String {
    let mut clean = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "token" { "REDACTED".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    clean.query_pairs_mut().clear().extend_pairs(pairs);
    clean.to_string()
}
