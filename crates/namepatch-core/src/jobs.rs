//! The NamePicker migration: five sport views gain an import, a visibility
//! flag, a `handleNamePicked` handler, a "Pick Name" header button and the
//! `<NamePicker>` tag itself.

use crate::types::{PatchJob, ReplacementPair};

/// Relative to the sports-app checkout root.
pub const DEFAULT_BASE_DIR: &str = "frontend/src/views";

const NAME_PICKER_IMPORT: &str = "import NamePicker from '../components/NamePicker.vue'";
const NAME_PICKER_FLAG: &str = "const showNamePicker = ref(false)";
const TEMPLATE_SEAM: &str = "</template>\n\n<script setup>";
const PICK_NAME_BUTTON: &str = concat!(
    "            <button type=\"button\" @click=\"showNamePicker = true\" class=\"btn btn-ghost btn-sm\" title=\"Pick from Name Database\">\n",
    "              <i class=\"fa-solid fa-address-book\"></i> Pick Name\n",
    "            </button>\n",
);

/// How the modal's close button is laid out in the header.
#[derive(Debug, Clone, Copy)]
enum CloseButton {
    /// `<button ...><i ...></i></button>` on one line.
    Inline,
    /// Button, icon and closing tag on three lines.
    Block,
}

#[derive(Debug, Clone, Copy)]
struct View {
    file: &'static str,
    anchor_import: &'static str,
    modal_flag: &'static str,
    form: &'static str,
    country_field: &'static str,
    close_fn: &'static str,
    title: &'static str,
    close_button: CloseButton,
}

const SPORT_VIEW_CSS: &str = "import '../assets/sport-view.css'";

const VIEWS: [View; 5] = [
    View {
        file: "LugeView.vue",
        anchor_import: SPORT_VIEW_CSS,
        modal_flag: "showAthleteModal",
        form: "athleteForm",
        country_field: "country",
        close_fn: "closeAthleteModal",
        title: "{{ editingAthlete ? 'Edit Athlete' : 'Create New Athlete' }}",
        close_button: CloseButton::Inline,
    },
    View {
        file: "SkeletonView.vue",
        anchor_import: SPORT_VIEW_CSS,
        modal_flag: "showAthleteModal",
        form: "athleteForm",
        country_field: "country",
        close_fn: "closeAthleteModal",
        title: "{{ editingAthlete ? 'Edit Athlete' : 'Create New Athlete' }}",
        close_button: CloseButton::Inline,
    },
    View {
        file: "SpeedSkatingView.vue",
        anchor_import: SPORT_VIEW_CSS,
        modal_flag: "showSkaterModal",
        form: "skaterForm",
        country_field: "country",
        close_fn: "closeSkaterModal",
        title: "{{ editingSkater ? 'Edit Skater' : 'Create New Skater' }}",
        close_button: CloseButton::Inline,
    },
    View {
        file: "TennisWorldView.vue",
        anchor_import: "import { useTennisStore } from '../stores/tennis'",
        modal_flag: "showAddPlayer",
        form: "newPlayer",
        country_field: "country",
        close_fn: "closeAddPlayerModal",
        title: "Add New Player",
        close_button: CloseButton::Block,
    },
    View {
        file: "MMAOrganizationView.vue",
        anchor_import: "import { useMMAStore } from '../stores/mma'",
        modal_flag: "showAddFighterModal",
        form: "fighterForm",
        country_field: "country_code",
        close_fn: "closeModals",
        title: "{{ showEditFighterModal ? 'Edit Fighter' : 'Add Fighter' }}",
        close_button: CloseButton::Block,
    },
];

/// The five migration jobs, in the order they run.
pub fn builtin_jobs() -> Vec<PatchJob> {
    VIEWS.iter().map(view_job).collect()
}

fn view_job(view: &View) -> PatchJob {
    let declaration = format!("const {} = ref(false)", view.modal_flag);
    let signature = format!("function {}()", view.close_fn);
    let handler = format!(
        "function handleNamePicked(data) {{\n  {form}.value.first_name = data.first_name\n  {form}.value.last_name = data.last_name\n  if (data.country_code) {form}.value.{country} = data.country_code\n}}\n\n{signature}",
        form = view.form,
        country = view.country_field,
        signature = signature,
    );
    let (header, patched_header) = header_pair(view);

    let pairs = vec![
        ReplacementPair::literal(
            view.anchor_import,
            format!("{}\n{}", view.anchor_import, NAME_PICKER_IMPORT),
        ),
        ReplacementPair::literal(
            declaration.clone(),
            format!("{}\n{}", declaration, NAME_PICKER_FLAG),
        ),
        ReplacementPair::literal(signature, handler),
        ReplacementPair::literal(header, patched_header),
        ReplacementPair::literal(
            TEMPLATE_SEAM,
            format!(
                "    <NamePicker v-model=\"showNamePicker\" @select=\"handleNamePicked\" />\n  {}",
                TEMPLATE_SEAM
            ),
        ),
    ];

    PatchJob::new(view.file, pairs)
}

fn header_pair(view: &View) -> (String, String) {
    let title = format!("          <h2>{}</h2>\n", view.title);
    let open = format!("<button @click=\"{}\" class=\"btn btn-ghost\">", view.close_fn);
    let icon = "<i class=\"fa-solid fa-xmark\"></i>";

    match view.close_button {
        CloseButton::Inline => (
            format!("{title}          {open}{icon}</button>"),
            format!(
                "{title}          <div class=\"modal-header-actions\">\n{PICK_NAME_BUTTON}            {open}{icon}</button>\n          </div>"
            ),
        ),
        CloseButton::Block => (
            format!("{title}          {open}\n            {icon}\n          </button>"),
            format!(
                "{title}          <div class=\"modal-header-actions\">\n{PICK_NAME_BUTTON}            {open}\n              {icon}\n            </button>\n          </div>"
            ),
        ),
    }
}
