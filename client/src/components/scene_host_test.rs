use scene::preset::ProjectCategory;

use super::*;
use crate::content::profile::PROFILE;

#[test]
fn hero_host_shows_profile_monogram() {
    let scene = host_scene(SceneKind::Hero, Some(PROFILE.monogram));
    assert_eq!(scene.caption.map(|c| c.text).as_deref(), Some(PROFILE.monogram));
}

#[test]
fn host_keeps_preset_caption_without_override() {
    assert!(host_scene(SceneKind::Hero, None).caption.is_some());
    assert!(host_scene(SceneKind::Contact, None).caption.is_none());
}

#[test]
fn scene_tags_follow_kind() {
    assert_eq!(scene_tag(SceneKind::Hero), "hero");
    assert_eq!(scene_tag(SceneKind::Contact), "contact");
    assert_eq!(scene_tag(SceneKind::Project(ProjectCategory::Video)), "video");
}
