// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Default mount-path assignment for newly added data disks.

/// Picks a mount path not used by any current item.
///
/// The first candidate is `/root/dataN` with N = item count + 1; if that
/// collides (items can be renamed or removed), numbered paths are probed
/// upward from `/root/data2` against the current path set. Earlier numbers
/// freed by deletion are deliberately not reused.
pub fn next_mount_path(existing: &[String]) -> String {
    let candidate = format!("/root/data{}", existing.len() + 1);
    if !existing.iter().any(|p| p == &candidate) {
        return candidate;
    }

    let mut n = 2u32;
    loop {
        let path = format!("/root/data{n}");
        if !existing.iter().any(|p| p == &path) {
            return path;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_two_assignments() {
        assert_eq!(next_mount_path(&[]), "/root/data1");
        assert_eq!(next_mount_path(&paths(&["/root/data1"])), "/root/data2");
    }

    #[test]
    fn test_no_reuse_after_delete() {
        // data1 was deleted; the survivor holds data2. The next assignment
        // probes past the occupied slot instead of going back to data1.
        assert_eq!(next_mount_path(&paths(&["/root/data2"])), "/root/data3");
    }

    #[test]
    fn test_probe_skips_occupied_paths() {
        let used = paths(&["/root/data2", "/root/data3", "/root/data4"]);
        assert_eq!(next_mount_path(&used), "/root/data5");
    }

    #[test]
    fn test_renamed_paths_do_not_collide() {
        let used = paths(&["/mnt/models", "/root/scratch"]);
        assert_eq!(next_mount_path(&used), "/root/data3");
    }

    #[test]
    fn test_never_duplicates() {
        let mut used: Vec<String> = Vec::new();
        for _ in 0..16 {
            let p = next_mount_path(&used);
            assert!(!used.contains(&p));
            used.push(p);
        }
    }
}
