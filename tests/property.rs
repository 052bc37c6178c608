mod property {
    mod limits;
    mod pipeline;
    mod placeholder;
}
