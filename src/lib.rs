/*! # `showcase`

The backend for a handful of small interactive pages. The host forwards UI
events here and draws whatever view-models come back.

## Pages

- **Gallery** ([`gallery`]): image cards added from a URL or an uploaded file,
  one selection at a time, delete with a short removal transition, keyboard
  shortcuts, a live count and a status line.
- **Registration** ([`forms::registration`]): live per-field validation, an
  age hint and a submit gate.
- **Contact** ([`forms::contact`]): required fields and a quick email check.
- **Product listings** ([`catalog`]): two catalogues rendered to rows.

## Status

- [x] Gallery controller
    - [x] Adding from URLs + uploaded files
    - [x] Selection + deletion (releasing local handles)
    - [x] Load failures fall back to a placeholder
    - [x] Keyboard shortcuts
- [x] Forms
- [x] Product listings
- [ ] A renderer. Hosts bring their own for now.
*/

pub mod catalog;
pub mod config;
pub mod error;
pub mod forms;
pub mod gallery;
pub mod models;
