#[cfg(test)]
pub const INTERNAL_POST: &str = "---
layout: post
title: Optimizing MySQL UUID-based IDs
---

Hibernate generates UUIDs as 36 characters strings, which is a waste of space and index pages.
";

#[cfg(test)]
pub const EXTERNAL_POST: &str = r#"---
layout: post
title: "Basic RESTful API versioning in Jersey"
external_url: https://example.com/ext
comments: false
---

This post was first published somewhere else.
"#;

#[cfg(test)]
pub const DRAFT_POST: &str = "---
layout: post
title: Deploying on a Friday
date: 2018-02-16 17:45:00 +0100
---

Don't.
";

#[cfg(test)]
pub const LIST_VALUED_POST: &str = "---
layout: post
title: B
tags:
  - java
  - jersey
---

Lists in the front matter are fine.
";
