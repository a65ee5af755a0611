/*!
# `FileOpen <handle> <path>`
Also `FileLength <handle> <register>` and `FileReadAll <handle> <register>`.

## Purpose
Read files into registers.

## Remarks
The path is expanded. Opening records the length of the file; handles
stay open until the script ends and opening a handle again replaces it.
A missing file or unknown handle is logged and the line is skipped.

## Example
```text
FileOpen notes ${HOME}/notes.txt
FileLength notes n
FileReadAll notes text
Send ${text}
```

*/
