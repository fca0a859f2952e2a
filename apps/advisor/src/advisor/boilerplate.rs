//! Security boilerplate shown next to every recommendation.

use serde::Serialize;

/// FastAPI OAuth2 bearer-token endpoint, returned verbatim.
pub const SECURITY_SNIPPET: &str = r#"from fastapi import FastAPI, Depends
from fastapi.security import OAuth2PasswordBearer

app = FastAPI()
oauth2_scheme = OAuth2PasswordBearer(tokenUrl="token")

@app.get("/secure-data/")
def read_secure(token: str = Depends(oauth2_scheme)):
    return {"message": "This is a protected endpoint"}
"#;

pub const SECURITY_SNIPPET_LANGUAGE: &str = "python";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeSnippet {
    pub title: &'static str,
    pub language: &'static str,
    pub code: &'static str,
}

pub fn security_snippet() -> CodeSnippet {
    CodeSnippet {
        title: "Security Boilerplate Snippet (FastAPI)",
        language: SECURITY_SNIPPET_LANGUAGE,
        code: SECURITY_SNIPPET,
    }
}
