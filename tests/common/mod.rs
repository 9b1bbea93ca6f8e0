//! In-memory backend shared by the integration tests.

#![allow(dead_code)]

use family_memories::{
    error::{MemoriesError, Result},
    FileEdit, FileRecord, FileUpload, MemoriesBackend, Vignette, VignetteDraft,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
struct State {
    vignettes: Vec<Vignette>,
    files: Vec<FileRecord>,
    blobs: HashMap<i64, Vec<u8>>,
    photos: usize,
    audio: usize,
    next_id: i64,
    failing_ops: HashSet<&'static str>,
    failing_uploads: HashSet<String>,
    calls: Vec<String>,
    photo_limit: Option<u32>,
}

/// A backend that keeps everything in memory and can be told to fail.
#[derive(Default)]
pub struct MemoryBackend {
    state: Mutex<State>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        let backend = Self::default();
        backend.state.lock().unwrap().next_id = 100;
        backend
    }

    pub fn with_vignettes(self, vignettes: Vec<Vignette>) -> Self {
        self.state.lock().unwrap().vignettes = vignettes;
        self
    }

    pub fn with_files(self, files: Vec<FileRecord>) -> Self {
        self.state.lock().unwrap().files = files;
        self
    }

    pub fn with_media(self, photos: usize, audio: usize) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.photos = photos;
            state.audio = audio;
        }
        self
    }

    pub fn with_blob(self, id: i64, bytes: &[u8]) -> Self {
        self.state.lock().unwrap().blobs.insert(id, bytes.to_vec());
        self
    }

    /// Make every call to `op` (e.g. `"list_files"`) fail with a 500.
    pub fn fail(&self, op: &'static str) {
        self.state.lock().unwrap().failing_ops.insert(op);
    }

    /// Make uploads of the named file fail.
    pub fn fail_upload_of(&self, file_name: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_uploads
            .insert(file_name.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self, op: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(op)).count()
    }

    pub fn files(&self) -> Vec<FileRecord> {
        self.state.lock().unwrap().files.clone()
    }

    pub fn vignettes(&self) -> Vec<Vignette> {
        self.state.lock().unwrap().vignettes.clone()
    }

    pub fn photo_limit(&self) -> Option<u32> {
        self.state.lock().unwrap().photo_limit
    }

    fn enter(&self, call: String, op: &'static str) -> Result<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.failing_ops.contains(op) {
            return Err(MemoriesError::api(op, 500, Some("Injected failure".into())));
        }
        Ok(state)
    }
}

impl MemoriesBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn list_vignettes(&self) -> Result<Vec<Vignette>> {
        let state = self.enter("list_vignettes".into(), "list_vignettes")?;
        Ok(state.vignettes.clone())
    }

    fn create_vignette(&self, draft: &VignetteDraft) -> Result<Vignette> {
        let mut state = self.enter("create_vignette".into(), "create_vignette")?;
        state.next_id += 1;
        let vignette = Vignette {
            id: state.next_id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            created_at: Some("2024-06-01T12:00:00".into()),
        };
        state.vignettes.insert(0, vignette.clone());
        Ok(vignette)
    }

    fn update_vignette(&self, id: i64, draft: &VignetteDraft) -> Result<Vignette> {
        let mut state = self.enter(format!("update_vignette {id}"), "update_vignette")?;
        let vignette = state
            .vignettes
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| MemoriesError::api("updating vignette", 404, Some("Vignette not found".into())))?;
        vignette.title.clone_from(&draft.title);
        vignette.content.clone_from(&draft.content);
        Ok(vignette.clone())
    }

    fn delete_vignette(&self, id: i64) -> Result<()> {
        let mut state = self.enter(format!("delete_vignette {id}"), "delete_vignette")?;
        state.vignettes.retain(|v| v.id != id);
        Ok(())
    }

    fn list_files(&self) -> Result<Vec<FileRecord>> {
        let state = self.enter("list_files".into(), "list_files")?;
        Ok(state.files.clone())
    }

    fn fetch_file(&self, id: i64) -> Result<Vec<u8>> {
        let state = self.enter(format!("fetch_file {id}"), "fetch_file")?;
        state
            .blobs
            .get(&id)
            .cloned()
            .ok_or_else(|| MemoriesError::api("fetching file", 404, Some("File not found".into())))
    }

    fn upload_file(&self, upload: &FileUpload) -> Result<FileRecord> {
        let mut state = self.enter(format!("upload_file {}", upload.file_name), "upload_file")?;
        if state.failing_uploads.contains(&upload.file_name) {
            return Err(MemoriesError::api("uploading file", 413, Some("File too large".into())));
        }
        state.next_id += 1;
        let record = FileRecord {
            id: state.next_id,
            title: Some(upload.file_name.clone()),
            filename: format!("{}-{}", state.next_id, upload.file_name),
            description: None,
            file_type: Some(upload.mime_type.clone()),
            created_at: Some("2024-06-01T12:00:00".into()),
        };
        let id = record.id;
        state.blobs.insert(id, upload.bytes.clone());
        state.files.push(record.clone());
        Ok(record)
    }

    fn update_file(&self, id: i64, edit: &FileEdit) -> Result<FileRecord> {
        let mut state = self.enter(format!("update_file {id}"), "update_file")?;
        let file = state
            .files
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| MemoriesError::api("updating file", 404, Some("File not found".into())))?;
        file.title = Some(edit.title.clone());
        file.description = Some(edit.description.clone());
        Ok(file.clone())
    }

    fn delete_file(&self, id: i64) -> Result<()> {
        let mut state = self.enter(format!("delete_file {id}"), "delete_file")?;
        state.files.retain(|f| f.id != id);
        state.blobs.remove(&id);
        Ok(())
    }

    fn list_photos(&self, limit: u32) -> Result<Vec<serde_json::Value>> {
        let mut state = self.enter(format!("list_photos {limit}"), "list_photos")?;
        state.photo_limit = Some(limit);
        let count = state.photos.min(limit as usize);
        Ok((0..count).map(|i| serde_json::json!({ "id": i })).collect())
    }

    fn list_audio(&self) -> Result<Vec<serde_json::Value>> {
        let state = self.enter("list_audio".into(), "list_audio")?;
        Ok((0..state.audio).map(|i| serde_json::json!({ "id": i })).collect())
    }
}

pub fn vignette(id: i64, title: &str, created_at: Option<&str>) -> Vignette {
    Vignette {
        id,
        title: title.to_string(),
        content: Some(format!("Story about {title}")),
        created_at: created_at.map(str::to_string),
    }
}

pub fn file(id: i64, title: Option<&str>, filename: &str, file_type: Option<&str>, created_at: Option<&str>) -> FileRecord {
    FileRecord {
        id,
        title: title.map(str::to_string),
        filename: filename.to_string(),
        description: None,
        file_type: file_type.map(str::to_string),
        created_at: created_at.map(str::to_string),
    }
}
