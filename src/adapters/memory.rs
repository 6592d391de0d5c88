//! In-memory store
//!
//! Implements every lookup port over plain maps. Used by the CLI after a
//! dataset is loaded and by tests.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use crate::core::models::{
    Milestone, MilestoneId, Project, ProjectId, Status, StatusId, Task, TaskId, User, UserId,
    UserStory, UserStoryId,
};
use crate::core::ports::{Catalog, NeighborResolver, Neighbors, TagIndex, VoteLedger};
use crate::core::services::{adjacent, navigation_cmp};

/// Records of one or more projects, held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    projects: BTreeMap<ProjectId, Project>,
    milestones: BTreeMap<MilestoneId, Milestone>,
    statuses: BTreeMap<StatusId, Status>,
    user_stories: BTreeMap<UserStoryId, UserStory>,
    users: BTreeMap<UserId, User>,
    tasks: BTreeMap<TaskId, Task>,
    /// Tags carried by items other than tasks (user stories, issues)
    item_tags: BTreeMap<ProjectId, BTreeSet<String>>,
    votes: BTreeMap<TaskId, BTreeSet<UserId>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a project
    pub fn insert_project(&mut self, project: Project) {
        self.projects.insert(project.id, project);
    }

    /// Add or replace a milestone
    pub fn insert_milestone(&mut self, milestone: Milestone) {
        self.milestones.insert(milestone.id, milestone);
    }

    /// Add or replace a status
    pub fn insert_status(&mut self, status: Status) {
        self.statuses.insert(status.id, status);
    }

    /// Add or replace a user story
    pub fn insert_user_story(&mut self, story: UserStory) {
        self.user_stories.insert(story.id, story);
    }

    /// Add or replace a user
    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    /// Add or replace a task
    pub fn insert_task(&mut self, task: Task) {
        self.tasks.insert(task.id, task);
    }

    /// Record tags used by a non-task item of `project`
    pub fn add_item_tags<I, S>(&mut self, project: ProjectId, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.item_tags.entry(project).or_default().extend(tags.into_iter().map(Into::into));
    }

    /// Record a vote of `user` for `task`
    pub fn add_vote(&mut self, task: TaskId, user: UserId) {
        self.votes.entry(task).or_default().insert(user);
    }

    /// Look up a project
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// Look up a milestone
    #[must_use]
    pub fn milestone(&self, id: MilestoneId) -> Option<&Milestone> {
        self.milestones.get(&id)
    }

    /// Look up a status
    #[must_use]
    pub fn status(&self, id: StatusId) -> Option<&Status> {
        self.statuses.get(&id)
    }

    /// Look up a user
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Look up a task
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Tasks of `project` in navigation order
    #[must_use]
    pub fn project_tasks(&self, project: ProjectId) -> Vec<Task> {
        let mut tasks: Vec<Task> =
            self.tasks.values().filter(|t| t.project.id == project).cloned().collect();
        tasks.sort_by(navigation_cmp);
        tasks
    }

    /// Every tag used in `project`, sorted
    #[must_use]
    pub fn project_tags(&self, project: ProjectId) -> BTreeSet<String> {
        let mut tags: BTreeSet<String> = self
            .tasks
            .values()
            .filter(|t| t.project.id == project)
            .flat_map(|t| t.tags.iter().map(|tag| tag.tag().to_string()))
            .collect();
        if let Some(extra) = self.item_tags.get(&project) {
            tags.extend(extra.iter().cloned());
        }
        tags
    }
}

impl TagIndex for MemoryStore {
    fn tag_exists(&self, project: ProjectId, tag: &str) -> anyhow::Result<bool> {
        let on_task = self
            .tasks
            .values()
            .any(|t| t.project.id == project && t.tags.iter().any(|x| x.tag() == tag));
        let on_item = self.item_tags.get(&project).is_some_and(|tags| tags.contains(tag));
        trace!("tag '{tag}' in project {project}: task={on_task} item={on_item}");
        Ok(on_task || on_item)
    }
}

impl Catalog for MemoryStore {
    fn project_exists(&self, id: ProjectId) -> anyhow::Result<bool> {
        Ok(self.projects.contains_key(&id))
    }

    fn milestone_exists(&self, id: MilestoneId) -> anyhow::Result<bool> {
        Ok(self.milestones.contains_key(&id))
    }

    fn status_exists(&self, id: StatusId) -> anyhow::Result<bool> {
        Ok(self.statuses.contains_key(&id))
    }

    fn user_story_exists(&self, id: UserStoryId) -> anyhow::Result<bool> {
        Ok(self.user_stories.contains_key(&id))
    }

    fn task_exists(&self, id: TaskId) -> anyhow::Result<bool> {
        Ok(self.tasks.contains_key(&id))
    }

    fn is_member(&self, project: ProjectId, user: UserId) -> anyhow::Result<bool> {
        Ok(self.projects.get(&project).is_some_and(|p| p.members.contains(&user)))
    }
}

impl NeighborResolver for MemoryStore {
    fn neighbors(&self, task: &Task) -> anyhow::Result<Neighbors> {
        let tasks = self.project_tasks(task.project.id);
        let Some((previous, next)) = adjacent(&tasks, task.id) else {
            anyhow::bail!("task {} is not stored in project {}", task.id, task.project.id);
        };
        Ok(Neighbors {
            previous: previous.cloned(),
            next: next.cloned(),
        })
    }
}

impl VoteLedger for MemoryStore {
    fn total_voters(&self, task: TaskId) -> anyhow::Result<u64> {
        Ok(self.votes.get(&task).map_or(0, |v| v.len() as u64))
    }

    fn is_voter(&self, task: TaskId, user: UserId) -> anyhow::Result<bool> {
        Ok(self.votes.get(&task).is_some_and(|v| v.contains(&user)))
    }
}
