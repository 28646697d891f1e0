//! In-Memory Record Store
//!
//! Process-memory implementation of all three repository ports. Ids
//! are assigned sequentially per entity kind under a single lock, so
//! assignment and insertion cannot race across concurrent requests.
//! State lives for the process lifetime only.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use promptlab::{
    DomainError, HistoryRepository, NewPromptHistory, NewTemplate, NewUser, PromptHistory,
    Template, TemplateRepository, User, UserRepository,
};

/// Mutex-guarded store for users, templates and prompt history.
pub struct MemoryStore {
    inner: Mutex<StoreInner>,
}

struct StoreInner {
    users: BTreeMap<i64, User>,
    templates: BTreeMap<i64, Template>,
    history: BTreeMap<i64, PromptHistory>,
    next_user_id: i64,
    next_template_id: i64,
    next_history_id: i64,
}

impl StoreInner {
    fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            templates: BTreeMap::new(),
            history: BTreeMap::new(),
            next_user_id: 1,
            next_template_id: 1,
            next_history_id: 1,
        }
    }

    fn insert_template(&mut self, new_template: NewTemplate) -> Template {
        let id = self.next_template_id;
        self.next_template_id += 1;

        let template = Template {
            id,
            title: new_template.title,
            description: new_template.description,
            content: new_template.content,
            tags: new_template.tags,
            created_at: Utc::now().to_rfc3339(),
        };
        self.templates.insert(id, template.clone());
        template
    }

    fn insert_history(&mut self, new_entry: NewPromptHistory) -> PromptHistory {
        let id = self.next_history_id;
        self.next_history_id += 1;

        let entry = PromptHistory {
            id,
            model: new_entry.model,
            prompt: new_entry.prompt,
            response: new_entry.response,
            metadata: new_entry.metadata,
            created_at: Utc::now().to_rfc3339(),
        };
        self.history.insert(id, entry.clone());
        entry
    }

    fn insert_user(&mut self, new_user: NewUser) -> User {
        let id = self.next_user_id;
        self.next_user_id += 1;

        let user = User {
            id,
            username: new_user.username,
            password: new_user.password,
        };
        self.users.insert(id, user.clone());
        user
    }
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner::new()),
        }
    }

    /// Creates a store pre-populated with the default template library.
    pub fn with_default_templates() -> Self {
        let mut inner = StoreInner::new();
        for template in default_templates() {
            inner.insert_template(template);
        }
        Self {
            inner: Mutex::new(inner),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>, DomainError> {
        self.inner
            .lock()
            .map_err(|_| DomainError::Repository("record store lock poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self.lock()?.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let inner = self.lock()?;
        Ok(inner
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let mut inner = self.lock()?;
        if inner
            .users
            .values()
            .any(|user| user.username == new_user.username)
        {
            return Err(DomainError::Conflict(format!(
                "username already taken: {}",
                new_user.username
            )));
        }
        Ok(inner.insert_user(new_user))
    }
}

#[async_trait]
impl TemplateRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Template>, DomainError> {
        Ok(self.lock()?.templates.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Template>, DomainError> {
        Ok(self.lock()?.templates.values().cloned().collect())
    }

    async fn create(&self, new_template: NewTemplate) -> Result<Template, DomainError> {
        Ok(self.lock()?.insert_template(new_template))
    }
}

#[async_trait]
impl HistoryRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<PromptHistory>, DomainError> {
        Ok(self.lock()?.history.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<PromptHistory>, DomainError> {
        Ok(self.lock()?.history.values().cloned().collect())
    }

    async fn create(&self, new_entry: NewPromptHistory) -> Result<PromptHistory, DomainError> {
        Ok(self.lock()?.insert_history(new_entry))
    }
}

/// The seed template library installed at startup.
pub fn default_templates() -> Vec<NewTemplate> {
    vec![
        NewTemplate {
            title: "Expert Chain-of-Thought".to_string(),
            description: "For complex reasoning tasks requiring domain expertise".to_string(),
            content: "As an expert in [DOMAIN], solve the following problem using rigorous \
                      step-by-step reasoning:\n\n[PROBLEM]\n\nTo solve this, I'll think through \
                      it systematically:\n1. First, I'll identify the key elements...\n2. Next, \
                      I'll analyze how these elements relate...\n3. Then, I'll apply the relevant \
                      principles...\n4. Finally, I'll derive the solution by..."
                .to_string(),
            tags: vec!["Chain-of-Thought".to_string(), "Expert Role".to_string()],
        },
        NewTemplate {
            title: "Information Extraction".to_string(),
            description: "For extracting structured data from text".to_string(),
            content: "Extract the following entities from the text below in JSON format:\n\
                      - [ENTITY_1]\n- [ENTITY_2]\n- [ENTITY_3]\n\nExample 1:\n\
                      \"[EXAMPLE_TEXT_1]\"\n{\n  \"entity_1\": \"[EXTRACTED_VALUE]\",\n  \
                      \"entity_2\": \"[EXTRACTED_VALUE]\",\n  \"entity_3\": \"[EXTRACTED_VALUE]\"\n}\
                      \n\nNow extract from this text:\n\"[INPUT_TEXT]\""
                .to_string(),
            tags: vec!["Few-Shot".to_string(), "Structured Output".to_string()],
        },
        NewTemplate {
            title: "Comparative Analysis".to_string(),
            description: "For analyzing differences between concepts".to_string(),
            content: "Analyze the similarities and differences between [CONCEPT_A] and \
                      [CONCEPT_B] using the following structured format:\n\n1. Key Similarities:\n   \
                      - Consider shared principles\n   - Identify common applications\n   \
                      - Note historical connections\n\n2. Important Differences:\n   \
                      - Examine foundational approaches\n   - Compare technical implementations\n   \
                      - Contrast practical limitations\n\n3. Synthesis:\n   \
                      - Explain how they complement each other\n   \
                      - Identify potential integration points"
                .to_string(),
            tags: vec!["Analytical".to_string(), "Structured".to_string()],
        },
        NewTemplate {
            title: "Code Debugging Assistant".to_string(),
            description: "For systematic code review and debugging".to_string(),
            content: "Review the following code and identify any bugs, inefficiencies, or \
                      improvements. Proceed systematically:\n\n```[LANGUAGE]\n[CODE]\n```\n\n\
                      Please provide your analysis in this format:\n1. Issues Identified:\n   \
                      - [Issue 1]: [Brief description]\n   - [Issue 2]: [Brief description]\n\n\
                      2. Recommended Fixes:\n```[LANGUAGE]\n[CORRECTED CODE SNIPPET 1]\n```\n\n\
                      3. Optimizations:\n   - [Suggestion 1]\n   - [Suggestion 2]\n\n\
                      4. Best Practices:\n   - [Recommendation 1]\n   - [Recommendation 2]"
                .to_string(),
            tags: vec!["Code".to_string(), "Debugging".to_string()],
        },
        NewTemplate {
            title: "Role-Based Persona".to_string(),
            description: "For responses from a specific expert perspective".to_string(),
            content: "You are an experienced [PROFESSION/ROLE] with expertise in \
                      [SPECIFIC_DOMAIN]. Your communication style is [STYLE_DESCRIPTION].\n\n\
                      I need your professional perspective on the following situation:\n\n\
                      [SITUATION/QUESTION]\n\nIn your response:\n\
                      - Draw on your [PROFESSION/ROLE] expertise\n\
                      - Consider important factors such as [FACTOR_1], [FACTOR_2]\n\
                      - Provide practical, actionable advice based on best practices in \
                      [SPECIFIC_DOMAIN]\n\
                      - Include any relevant [TOOLS/METHODS/FRAMEWORKS] that would be helpful"
                .to_string(),
            tags: vec!["Role-Play".to_string(), "Expert".to_string()],
        },
        NewTemplate {
            title: "Task Decomposition".to_string(),
            description: "For breaking down complex problems into manageable steps".to_string(),
            content: "I need to accomplish the following complex task: [TASK_DESCRIPTION]\n\n\
                      Please help me break this down into smaller, manageable subtasks. For each \
                      subtask:\n\n1. Provide a clear objective\n2. List the resources or \
                      information needed\n3. Highlight potential challenges\n4. Suggest an \
                      approach or methodology\n5. Indicate how to verify completion\n\n\
                      Organize these in a logical sequence, indicating dependencies between \
                      subtasks where they exist."
                .to_string(),
            tags: vec!["Problem-Solving".to_string(), "Structured".to_string()],
        },
    ]
}
